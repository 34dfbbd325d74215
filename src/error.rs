//! Domain error types for iconpick
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for layout configuration and CLI input
//! - `IconPickError` as the top-level error type

use thiserror::Error;

/// Top-level error type for iconpick
#[derive(Debug, Error)]
pub enum IconPickError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors related to layout configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' must be greater than zero")]
    ZeroDimension(&'static str),

    #[error("{rows} rows of {columns} columns do not fit in one page")]
    PageTooLarge { rows: usize, columns: usize },

    #[error("Invalid value '{value}' for {flag}")]
    InvalidNumber { flag: String, value: String },

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid cell size '{0}', expected WIDTHxHEIGHT in pixels")]
    InvalidCellSize(String),

    #[error("Unknown icon '{0}'")]
    UnknownIcon(String),
}

/// Result type alias for IconPickError
pub type Result<T> = std::result::Result<T, IconPickError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_to_top_level() {
        let err: IconPickError = ConfigError::ZeroDimension("rows_in_one_page").into();
        assert_eq!(
            err.to_string(),
            "Config error: 'rows_in_one_page' must be greater than zero"
        );
    }
}
