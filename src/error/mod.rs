//! Error types for the Quiz App client.
//!
//! Each domain gets its own `thiserror` enum. [`Error`] aggregates the ones that can stop
//! startup so `main` has a single type to report before exiting. Question validation errors
//! are recoverable and stay local to the add-question form.

pub mod config;
pub mod question;
pub mod route;
pub mod theme;

use thiserror::Error;

use crate::error::{config::ConfigError, route::RouteTableError, theme::ThemeError};

/// Main error type for the Quiz App client.
///
/// Uses `#[from]` so startup code can propagate any domain error with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Build-time configuration value could not be parsed.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Theme palette contains an invalid color.
    #[error(transparent)]
    ThemeError(#[from] ThemeError),
    /// Route table is inconsistent with the `Route` enum.
    #[error(transparent)]
    RouteTableError(#[from] RouteTableError),
}
