use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("Color {0:?} must have exactly 6 hex digits")]
    InvalidLength(String),
    #[error("Color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}
