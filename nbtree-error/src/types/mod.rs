pub mod coerce;
pub mod compression;
pub mod decode;
pub mod encode;

// Публичный экспорт всех типов ошибок из вложенных модулей, чтобы упростить
// доступ к ним из внешнего кода.
pub use coerce::*;
pub use compression::*;
pub use decode::*;
pub use encode::*;

use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Общая ошибка крейта: объединяет ошибки разбора, сериализации, приведения
/// типов, сжатия и ввода-вывода.
#[derive(Debug, Error)]
pub enum NbtError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NbtError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Является ли ошибка восстановимой на уровне вызывающего кода.
    ///
    /// Ошибки приведения типов восстановимы (можно взять значение по
    /// умолчанию), а структурные ошибки разбора невосстановимы.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Coerce(_))
    }

    fn inner(&self) -> Option<&dyn ErrorExt> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Coerce(e) => Some(e),
            Self::Compression(e) => Some(e),
            Self::InvalidConfig { .. } | Self::Io(_) => None,
        }
    }
}

impl ErrorExt for NbtError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidConfig { .. } => StatusCode::InvalidArgs,
            Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                StatusCode::UnexpectedEof
            }
            Self::Io(_) => StatusCode::Io,
            _ => self
                .inner()
                .map(|inner| inner.status_code())
                .unwrap_or(StatusCode::Unknown),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self.inner() {
            Some(inner) => inner.client_message(),
            None => self.to_string(),
        }
    }

    fn log_message(&self) -> String {
        match self.inner() {
            Some(inner) => inner.log_message(),
            None => format!("{self:?}"),
        }
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = match self.inner() {
            Some(inner) => inner.metrics_tags(),
            None => vec![
                ("error_type", self.type_name()),
                ("status_code", self.status_code().to_string()),
            ],
        };
        tags.push(("recoverable", self.is_recoverable().to_string()));
        tags
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decode_delegates_status() {
        let err: NbtError = DecodeError::InvalidTagId { id: 42, offset: 0 }.into();
        assert_eq!(err.status_code(), StatusCode::InvalidData);
        assert_eq!(err.client_message(), "Invalid tag data");
        assert!(!err.is_recoverable());
        assert!(err
            .metrics_tags()
            .iter()
            .any(|(k, v)| *k == "invalid_tag" && v == "0x2A"));
    }

    #[test]
    fn test_coerce_is_recoverable() {
        let err: NbtError = CoerceError::not_representable("List", "f32").into();
        assert!(err.is_recoverable());
        assert_eq!(err.status_code(), StatusCode::TypeError);
        assert_eq!(err.to_string(), "Couldn't cast List to f32");
    }

    #[test]
    fn test_io_eof_maps_to_unexpected_eof() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: NbtError = io.into();
        assert_eq!(err.status_code(), StatusCode::UnexpectedEof);

        let err: NbtError = std::io::Error::other("disk").into();
        assert_eq!(err.status_code(), StatusCode::Io);
    }

    #[test]
    fn test_invalid_config() {
        let err = NbtError::invalid_config("max_depth must be >= 1");
        assert_eq!(err.status_code(), StatusCode::InvalidArgs);
        assert!(err.to_string().contains("max_depth"));
    }
}
