use tracing_subscriber::EnvFilter;

use super::{config::LoggingConfig, LoggingError};

/// Строит фильтр событий.
///
/// Если задана переменная `RUST_LOG`, она имеет приоритет над конфигурацией.
pub fn build_filter_from_config(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        return Ok(env_filter);
    }
    let directive = config.build_filter_directive();
    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidDirective {
        directive,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_filter_from_config() {
        env::remove_var("RUST_LOG");
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        let filter = build_filter_from_config(&config).unwrap();
        assert_eq!(filter.to_string(), "nbtree=debug");
    }

    #[test]
    #[serial]
    fn test_invalid_directive() {
        env::remove_var("RUST_LOG");
        let config = LoggingConfig {
            level: "nbtree=loud".to_string(),
            ..LoggingConfig::default()
        };
        let err = build_filter_from_config(&config).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidDirective { .. }));
    }

    #[test]
    #[serial]
    fn test_rust_log_wins() {
        env::set_var("RUST_LOG", "warn");
        let config = LoggingConfig {
            level: "nbtree=loud".to_string(),
            ..LoggingConfig::default()
        };
        let filter = build_filter_from_config(&config);
        env::remove_var("RUST_LOG");
        assert_eq!(filter.unwrap().to_string(), "warn");
    }
}
