//! Строка формата: сырые байты с префиксом длины u16.
//!
//! Содержимое не проверяется на корректность UTF-8 ни при чтении, ни при
//! записи, поэтому байты переживают round-trip без изменений.

use std::{
    borrow::{Borrow, Cow},
    fmt,
    str::Utf8Error,
};

/// Последовательность байт, используемая как значение `String`-тега и
/// как имя тега.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Длина в байтах.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Возвращает `&str`, если байты являются корректным UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Текстовое представление с заменой некорректных последовательностей
    /// на `U+FFFD`.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Debug for NbtString {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for NbtString {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&String> for NbtString {
    fn from(s: &String) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for NbtString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for NbtString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<NbtString> for Vec<u8> {
    fn from(s: NbtString) -> Self {
        s.0
    }
}

impl AsRef<[u8]> for NbtString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for NbtString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for NbtString {
    fn eq(
        &self,
        other: &str,
    ) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(
        &self,
        other: &&str,
    ) -> bool {
        self.0 == other.as_bytes()
    }
}
