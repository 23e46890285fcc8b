use std::io::{self, Stderr};

use tracing_subscriber::{fmt, layer::Layer, registry::LookupSpan};

use super::config::{LogFormat, LoggingConfig};

/// Слой форматирования по конфигурации.
///
/// Возвращаем boxed trait-объект, чтобы стереть конкретный тип формата
/// (json/pretty/compact). События пишутся в stderr.
pub fn build_formatter_from_config<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let writer: fn() -> Stderr = io::stderr;

    match config.format {
        LogFormat::Json => Box::new(
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target)
                .with_line_number(config.with_line_numbers),
        ),
        LogFormat::Pretty => Box::new(
            fmt::layer()
                .pretty()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_line_number(config.with_line_numbers),
        ),
        LogFormat::Compact => Box::new(
            fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_line_number(config.with_line_numbers),
        ),
    }
}
