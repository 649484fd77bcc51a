#![allow(non_snake_case)]

use quiz_app::{client, client::config::ClientConfig, startup};

fn main() {
    let config = match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let context = match startup::prepare(config) {
        Ok(context) => context,
        Err(e) => {
            dioxus_logger::tracing::error!("Startup error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(context.config)
        .with_context(context.theme)
        .launch(client::App);
}
