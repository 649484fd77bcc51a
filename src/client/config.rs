use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

pub const LOG_LEVEL_VAR: &str = "QUIZ_LOG_LEVEL";
pub const SEED_SAMPLE_QUESTIONS_VAR: &str = "QUIZ_SEED_SAMPLE_QUESTIONS";

/// Client settings baked in at build time.
///
/// A browser client has no process environment, so values are read with `option_env!` when
/// the crate is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Maximum level emitted by the logger.
    pub log_level: Level,

    /// Fill the question bank with sample questions on startup.
    pub seed_sample_questions: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            seed_sample_questions: false,
        }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(
            option_env!("QUIZ_LOG_LEVEL"),
            option_env!("QUIZ_SEED_SAMPLE_QUESTIONS"),
        )
    }

    /// Builds a config from raw variable values, unset values fall back to the defaults.
    pub fn parse(
        log_level: Option<&str>,
        seed_sample_questions: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            log_level: log_level
                .map(parse_level)
                .transpose()?
                .unwrap_or(defaults.log_level),
            seed_sample_questions: seed_sample_questions
                .map(|value| parse_bool(SEED_SAMPLE_QUESTIONS_VAR, value))
                .transpose()?
                .unwrap_or(defaults.seed_sample_questions),
        })
    }
}

fn parse_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: LOG_LEVEL_VAR.to_string(),
            reason: format!("{value:?}: {e}"),
        })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{value:?} is not a boolean"),
        }),
    }
}
