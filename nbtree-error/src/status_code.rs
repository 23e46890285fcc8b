use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Коды статуса для категоризации ошибок кодека.
///
/// # Диапазоны:
/// - 0xxx: Успех
/// - 1xxx: Общие ошибки
/// - 2xxx: Ошибки данных (приведение типов, доступ к полям)
/// - 5xxx: Хранилище (повреждённые данные, сжатие)
/// - 6xxx: IO
/// - 8xxx: Формат (кодирование / декодирование тегов)
///
/// # Реализация:
/// - `num_enum::TryFromPrimitive` даёт нативную реализацию `TryFrom<u32>`.
/// - опционально: `strum` для `AsRefStr`/`EnumIter` (feature = "strum").
/// - опционально: `serde_repr` для сериализации в виде числового значения
///   (feature = "serde_repr").
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Успех ===
    Success = 0,

    // === 1xxx: Общие ошибки ===
    Unknown = 1000,
    Internal = 1003,
    InvalidArgs = 1004,

    // === 2xxx: Ошибки данных ===
    NotFound = 2000,
    TypeError = 2002,
    InvalidValue = 2004,
    InvalidData = 2009,

    // === 5xxx: Хранилище ===
    CorruptedData = 5002,
    CompressionFailed = 5005,

    // === 6xxx: IO ===
    Io = 6000,
    UnexpectedEof = 6007,

    // === 8xxx: Формат ===
    InvalidInteger = 8005,
    InvalidFloat = 8006,
    SizeLimit = 8007,
    DepthLimit = 8008,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Пытается получить вариант `StatusCode` из `u32`.
    ///
    /// Использует `TryFrom<u32>` из `num_enum`; возвращает `None`, если
    /// значение не соответствует ни одному варианту.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Вернёт `true`, если переданный `code` означает успешный результат.
    pub fn is_success(code: u32) -> bool {
        Self::Success as u32 == code
    }

    /// Ошибка на стороне вызывающего: неверный запрос к данным (2xxx) или
    /// неверные аргументы.
    pub fn is_client_error(&self) -> bool {
        (2000..=2999).contains(&self.code()) || matches!(self, Self::InvalidArgs)
    }

    /// Ошибка формата: входные байты не являются корректным потоком тегов
    /// (диапазон 8xxx).
    pub fn is_format_error(&self) -> bool {
        (8000..=8999).contains(&self.code())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет разделение ошибок вызывающего и ошибок формата.
    #[test]
    fn test_client_vs_format() {
        assert!(StatusCode::TypeError.is_client_error());
        assert!(StatusCode::InvalidArgs.is_client_error());
        assert!(!StatusCode::SizeLimit.is_client_error());
        assert!(StatusCode::SizeLimit.is_format_error());
        assert!(StatusCode::DepthLimit.is_format_error());
        assert!(!StatusCode::Io.is_format_error());
    }

    /// Тест проверяет конвертацию через `TryFrom<u32>` и вспомогательную
    /// `from_u32`.
    #[test]
    fn test_from_try_from_u32() {
        let n = StatusCode::NotFound.code();
        assert_eq!(StatusCode::try_from(n).unwrap(), StatusCode::NotFound);
        assert!(StatusCode::from_u32(99999).is_none());
    }

    #[test]
    fn test_code_and_into() {
        let c = StatusCode::CompressionFailed;
        assert_eq!(c.code(), 5005);
        let n: u32 = c.into();
        assert_eq!(n, 5005);
        assert!(StatusCode::is_success(StatusCode::Success.code()));
        assert!(!StatusCode::is_success(StatusCode::NotFound.code()));
    }

    /// Тест проверяет формат `Display`: строка должна содержать имя варианта и
    /// числовой код.
    #[test]
    fn test_display_contains_name_and_code() {
        let s = format!("{}", StatusCode::DepthLimit);
        assert!(s.contains("8008"), "Display must contain code 8008, got: {s}");
        assert!(
            s.contains("DepthLimit"),
            "Display must contain variant name 'DepthLimit', got: {s}"
        );
    }
}
