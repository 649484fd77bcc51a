//! Startup checks run once before the application is launched.

use dioxus_logger::tracing;

use crate::{
    client::{
        config::ClientConfig,
        router::{validate_route_table, ROUTE_TABLE},
        theme::Theme,
    },
    error::Error,
};

/// Values injected into the root context at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchContext {
    pub config: ClientConfig,
    pub theme: Theme,
}

/// Validates the route table and builds the theme.
///
/// # Returns
/// - `Ok(LaunchContext)` - Config and theme ready to be provided to the root component
/// - `Err(Error::RouteTableError)` - A registered path is duplicated or mounts the wrong view
/// - `Err(Error::ThemeError)` - A palette color is malformed
pub fn prepare(config: ClientConfig) -> Result<LaunchContext, Error> {
    validate_route_table(&ROUTE_TABLE)?;
    let theme = Theme::quiz()?;

    tracing::info!(
        routes = ROUTE_TABLE.len(),
        mode = theme.mode.as_str(),
        seed_sample_questions = config.seed_sample_questions,
        "Starting Quiz App"
    );

    Ok(LaunchContext { config, theme })
}
