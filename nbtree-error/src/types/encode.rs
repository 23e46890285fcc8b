use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибка сериализации дерева тегов.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Значение не помещается в поле длины формата
    /// (строка > 65535 байт, массив или список > i32::MAX элементов).
    #[error("{what} length {len} exceeds format limit {limit}")]
    LengthOverflow {
        what: &'static str,
        len: usize,
        limit: usize,
    },

    /// Превышена допустимая вложенность контейнеров.
    #[error("Nesting depth {depth} exceeds limit {limit}")]
    DepthLimit { depth: usize, limit: usize },

    /// Член `Compound` имеет вид `End`: его кадр совпал бы с маркером
    /// конца и оборвал бы `Compound` при разборе.
    #[error("Compound member {name:?} is an End tag")]
    EndMember { name: String },

    /// Список вида `End` с элементами не разбирается обратно.
    #[error("List of End declares {len} elements")]
    EndListElements { len: usize },

    #[error("I/O error while encoding: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorExt for EncodeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::LengthOverflow { .. } => StatusCode::SizeLimit,
            Self::DepthLimit { .. } => StatusCode::DepthLimit,
            Self::EndMember { .. } | Self::EndListElements { .. } => StatusCode::InvalidValue,
            Self::Io(_) => StatusCode::Io,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::LengthOverflow { what, .. } => format!("{what} is too long to encode"),
            Self::DepthLimit { .. } => "Tag tree is nested too deeply".to_string(),
            Self::EndMember { .. } | Self::EndListElements { .. } => {
                "End tag cannot be stored in a container".to_string()
            }
            Self::Io(_) => "Failed to write tag data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_overflow_message() {
        let err = EncodeError::LengthOverflow {
            what: "string",
            len: 70_000,
            limit: u16::MAX as usize,
        };
        assert_eq!(err.to_string(), "string length 70000 exceeds format limit 65535");
        assert_eq!(err.status_code(), StatusCode::SizeLimit);
    }

    #[test]
    fn test_end_in_container() {
        let err = EncodeError::EndMember {
            name: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Compound member \"x\" is an End tag");
        assert_eq!(err.status_code(), StatusCode::InvalidValue);
        assert_eq!(
            EncodeError::EndListElements { len: 2 }.client_message(),
            "End tag cannot be stored in a container"
        );
    }

    #[test]
    fn test_from_io() {
        let err: EncodeError = std::io::Error::other("boom").into();
        assert_eq!(err.status_code(), StatusCode::Io);
        assert_eq!(err.client_message(), "Failed to write tag data");
    }
}
