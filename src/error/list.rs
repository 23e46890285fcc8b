use thiserror::Error;

use crate::codec::TagKind;

/// Ошибка структурного изменения [`List`](crate::codec::List).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Вид добавляемого элемента не совпадает с видом списка.
    #[error("Cannot add {found} to a list of {expected}")]
    KindMismatch { expected: TagKind, found: TagKind },

    /// `End` не может быть элементом списка.
    #[error("End tag cannot be a list element")]
    EndElement,

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListError::KindMismatch {
            expected: TagKind::Int,
            found: TagKind::String,
        };
        assert_eq!(err.to_string(), "Cannot add String to a list of Int");
    }
}
