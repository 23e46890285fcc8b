use std::{any::Any, error::Error};

use crate::StatusCode;

/// Расширение для ошибок библиотеки (object-safe).
///
/// Предоставляет вспомогательные методы для работы с ошибками:
/// - извлечение статус-кода,
/// - безопасное сообщение для вызывающего кода,
/// - детализированное сообщение для логов,
/// - формирование тегов для систем наблюдаемости.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Статус ошибки.
    ///
    /// По умолчанию возвращает [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Возвращает ошибку как [`Any`](std::any::Any),
    /// чтобы можно было выполнить downcast к конкретному типу.
    fn as_any(&self) -> &dyn Any;

    /// Короткое сообщение без внутренних деталей (смещений, сырых байт).
    ///
    /// Для внутренних ошибок возвращает строку `"Internal error"`.
    fn client_message(&self) -> String {
        match self.status_code() {
            StatusCode::Unknown | StatusCode::Internal => "Internal error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Детализированное сообщение для логов.
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Набор тегов для систем наблюдаемости.
    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ]
    }

    /// Имя типа ошибки (для метрик или логирования).
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{any::Any, error::Error, fmt};

    use super::*;

    // Вспомогательный тип ошибки без переопределения status_code (использует
    // default = Internal).
    #[derive(Debug)]
    struct DefaultError(pub &'static str);

    impl fmt::Display for DefaultError {
        fn fmt(
            &self,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            write!(f, "DefaultError: {}", self.0)
        }
    }

    impl Error for DefaultError {}

    impl ErrorExt for DefaultError {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct TypeMismatch(pub &'static str);

    impl fmt::Display for TypeMismatch {
        fn fmt(
            &self,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            write!(f, "TypeMismatch: {}", self.0)
        }
    }

    impl Error for TypeMismatch {}

    impl ErrorExt for TypeMismatch {
        fn status_code(&self) -> StatusCode {
            StatusCode::TypeError
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_default_status_code_is_internal() {
        let e = DefaultError("oops");
        assert_eq!(e.status_code(), StatusCode::Internal);
        assert_eq!(e.client_message(), "Internal error");
    }

    #[test]
    fn test_client_message_non_internal() {
        let e = TypeMismatch("nope");
        assert_eq!(e.client_message(), e.to_string());
    }

    /// Тест проверяет, что `as_any` позволяет выполнить downcast к конкретному
    /// типу.
    #[test]
    fn test_as_any_downcast() {
        let e = TypeMismatch("x");
        let down = e.as_any().downcast_ref::<TypeMismatch>();
        assert_eq!(down.map(|d| d.0), Some("x"));
    }

    #[test]
    fn test_metrics_tags_and_type_name() {
        let e = TypeMismatch("t");
        let tags = e.metrics_tags();
        assert!(tags
            .iter()
            .any(|(k, v)| *k == "status_code" && v == &StatusCode::TypeError.to_string()));
        assert!(e.type_name().ends_with("TypeMismatch"));
        assert_eq!(e.log_message(), format!("{e:?}"));
    }
}
