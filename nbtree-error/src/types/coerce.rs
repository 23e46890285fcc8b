use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибка приведения тега к запрошенному типу.
///
/// Полностью восстановимая: вызывающий код может подставить значение по
/// умолчанию или пробросить ошибку дальше.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// Тег данного вида не приводится к запрошенному типу
    /// (например, `Compound` к числу).
    #[error("Couldn't cast {from} to {to}")]
    NotRepresentable { from: &'static str, to: &'static str },

    /// Строковый тег не разбирается как число запрошенного типа.
    #[error("Couldn't parse {input:?} as {to}: {reason}")]
    ParseFailure {
        to: &'static str,
        input: String,
        reason: String,
    },

    /// В `Compound` нет тега с таким именем.
    #[error("Couldn't find tag {name:?}")]
    MissingEntry { name: String },
}

impl CoerceError {
    pub fn not_representable(
        from: &'static str,
        to: &'static str,
    ) -> Self {
        Self::NotRepresentable { from, to }
    }

    pub fn parse_failure(
        to: &'static str,
        input: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::ParseFailure {
            to,
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

impl ErrorExt for CoerceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotRepresentable { .. } => StatusCode::TypeError,
            Self::ParseFailure { to, .. } if matches!(*to, "f32" | "f64") => {
                StatusCode::InvalidFloat
            }
            Self::ParseFailure { .. } => StatusCode::InvalidInteger,
            Self::MissingEntry { .. } => StatusCode::NotFound,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = CoerceError::not_representable("Compound", "i32");
        assert_eq!(e.to_string(), "Couldn't cast Compound to i32");
        assert_eq!(e.status_code(), StatusCode::TypeError);

        let e = CoerceError::MissingEntry {
            name: "Pos".to_string(),
        };
        assert_eq!(e.to_string(), "Couldn't find tag \"Pos\"");
        assert_eq!(e.status_code(), StatusCode::NotFound);
    }

    #[test]
    fn test_parse_failure_status_by_target() {
        let e = CoerceError::parse_failure("f64", "abc", "invalid float literal");
        assert_eq!(e.status_code(), StatusCode::InvalidFloat);
        let e = CoerceError::parse_failure("u8", "300", "number too large");
        assert_eq!(e.status_code(), StatusCode::InvalidInteger);
        assert!(e.to_string().contains("\"300\""));
    }
}
