pub mod app;
pub mod components;
pub mod config;
pub mod router;
pub mod routes;
pub mod store;
pub mod theme;

pub use app::App;
