use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Path {0:?} is registered more than once")]
    DuplicatePath(&'static str),
    #[error("Path {path:?} does not resolve to the {view} view")]
    Unresolved { path: &'static str, view: &'static str },
}
