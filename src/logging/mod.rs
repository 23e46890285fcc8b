//! Инициализация `tracing`-подписчика для приложений, использующих кодек.
//!
//! Сам кодек только порождает события: `trace` на каждый тег, `debug` на
//! каждый документ и оболочку, `warn` на пропущенные элементы списка.

pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
pub use filters::build_filter_from_config;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    /// Глобальный подписчик уже установлен.
    #[error("Logging is already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Устанавливает глобальный подписчик.
///
/// Повторный вызов возвращает [`LoggingError::AlreadyInitialized`].
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = filters::build_filter_from_config(config)?;
    let fmt_layer = formatter::build_formatter_from_config(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    /// Второй вызов не паникует, а возвращает ошибку.
    #[test]
    #[serial]
    fn test_second_init_fails() {
        std::env::remove_var("RUST_LOG");
        let config = LoggingConfig {
            format: LogFormat::Json,
            ..LoggingConfig::default()
        };
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::AlreadyInitialized(_))
        ));
    }
}
