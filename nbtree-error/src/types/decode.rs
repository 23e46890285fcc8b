use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Структурная ошибка разбора потока тегов.
///
/// Каждый вариант несёт смещение курсора в момент ошибки. Повторять разбор
/// бессмысленно: результат является чистой функцией входных байт.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Неизвестный идентификатор тега.
    #[error("Invalid tag id 0x{id:02X} [offset: 0x{offset:X}]")]
    InvalidTagId { id: u8, offset: u64 },

    /// Вход закончился раньше, чем payload тега.
    #[error(
        "Unexpected end of input: needed {needed} bytes, {available} available [offset: 0x{offset:X}]"
    )]
    Truncated {
        needed: u64,
        available: u64,
        offset: u64,
    },

    /// Отрицательная длина массива или списка.
    #[error("Invalid {what} length {len} [offset: 0x{offset:X}]")]
    InvalidLength {
        what: &'static str,
        len: i64,
        offset: u64,
    },

    /// Превышена допустимая вложенность контейнеров.
    #[error("Nesting depth {depth} exceeds limit {limit} [offset: 0x{offset:X}]")]
    DepthLimit {
        depth: usize,
        limit: usize,
        offset: u64,
    },
}

impl DecodeError {
    /// Смещение курсора, на котором обнаружена ошибка.
    pub fn offset(&self) -> u64 {
        match self {
            Self::InvalidTagId { offset, .. }
            | Self::Truncated { offset, .. }
            | Self::InvalidLength { offset, .. }
            | Self::DepthLimit { offset, .. } => *offset,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    /// Возвращает recovery hint для пользователя.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Truncated { .. } => Some("Input may be truncated. Check file integrity"),
            Self::InvalidTagId { .. } => {
                Some("Check the byte order and that the input is not compressed twice")
            }
            Self::DepthLimit { .. } => Some("Increase max_depth if the tree is legitimately deep"),
            Self::InvalidLength { .. } => None,
        }
    }
}

impl ErrorExt for DecodeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTagId { .. } => StatusCode::InvalidData,
            Self::Truncated { .. } => StatusCode::UnexpectedEof,
            Self::InvalidLength { .. } => StatusCode::CorruptedData,
            Self::DepthLimit { .. } => StatusCode::DepthLimit,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidTagId { .. } => "Invalid tag data".to_string(),
            Self::Truncated { .. } => "Incomplete tag data".to_string(),
            Self::InvalidLength { what, .. } => format!("Corrupted {what} length"),
            Self::DepthLimit { .. } => "Tag tree is nested too deeply".to_string(),
        }
    }

    fn log_message(&self) -> String {
        let mut msg = format!("{self:?}");
        if let Some(hint) = self.recovery_hint() {
            msg.push_str(&format!(" | Hint: {hint}"));
        }
        msg
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ];
        if let Self::InvalidTagId { id, .. } = self {
            tags.push(("invalid_tag", format!("0x{id:02X}")));
        }
        tags
    }
}

// Конверсия в std::io::Error для вызывающего кода, работающего с Read/Write
impl From<DecodeError> for std::io::Error {
    fn from(e: DecodeError) -> Self {
        let kind = match &e {
            DecodeError::Truncated { .. } => std::io::ErrorKind::UnexpectedEof,
            _ => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_offset_in_hex() {
        let err = DecodeError::InvalidTagId {
            id: 0x2A,
            offset: 0x10,
        };
        let s = err.to_string();
        assert!(s.contains("0x2A"), "got: {s}");
        assert!(s.contains("offset: 0x10"), "got: {s}");
        assert_eq!(err.offset(), 16);
    }

    #[test]
    fn test_status_codes() {
        let t = DecodeError::Truncated {
            needed: 4,
            available: 1,
            offset: 3,
        };
        assert_eq!(t.status_code(), StatusCode::UnexpectedEof);
        assert!(t.is_truncated());

        let l = DecodeError::InvalidLength {
            what: "list",
            len: -1,
            offset: 0,
        };
        assert_eq!(l.status_code(), StatusCode::CorruptedData);
        assert_eq!(l.client_message(), "Corrupted list length");
    }

    #[test]
    fn test_into_io_error_kind() {
        let io: std::io::Error = DecodeError::Truncated {
            needed: 1,
            available: 0,
            offset: 0,
        }
        .into();
        assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);

        let io: std::io::Error = DecodeError::InvalidTagId { id: 99, offset: 0 }.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_log_message_has_hint() {
        let err = DecodeError::DepthLimit {
            depth: 513,
            limit: 512,
            offset: 7,
        };
        assert!(err.log_message().contains("Hint:"));
        assert!(err
            .metrics_tags()
            .iter()
            .all(|(k, _)| *k != "invalid_tag"));
    }
}
