//! Упорядоченный набор именованных тегов.
//!
//! Порядок вставки сохраняется и определяет порядок записи в поток.
//! Повторная вставка того же имени заменяет значение на прежней позиции.

use indexmap::{map, IndexMap};

use super::{List, NbtString, Tag};
use crate::error::CoerceError;

/// Именованные теги, упорядоченные по вставке.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    entries: IndexMap<NbtString, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Option<&Tag> {
        self.entries.get(name.as_ref())
    }

    pub fn get_mut(
        &mut self,
        name: impl AsRef<[u8]>,
    ) -> Option<&mut Tag> {
        self.entries.get_mut(name.as_ref())
    }

    pub fn contains(
        &self,
        name: impl AsRef<[u8]>,
    ) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    /// Вставляет тег и возвращает предыдущее значение с тем же именем.
    pub fn insert(
        &mut self,
        name: impl Into<NbtString>,
        tag: impl Into<Tag>,
    ) -> Option<Tag> {
        self.entries.insert(name.into(), tag.into())
    }

    /// Удаляет тег, сохраняя порядок остальных.
    pub fn remove(
        &mut self,
        name: impl AsRef<[u8]>,
    ) -> Option<Tag> {
        self.entries.shift_remove(name.as_ref())
    }

    pub fn iter(&self) -> map::Iter<'_, NbtString, Tag> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> map::IterMut<'_, NbtString, Tag> {
        self.entries.iter_mut()
    }

    pub fn names(&self) -> map::Keys<'_, NbtString, Tag> {
        self.entries.keys()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry(
        &self,
        name: &[u8],
    ) -> Result<&Tag, CoerceError> {
        self.entries
            .get(name)
            .ok_or_else(|| CoerceError::MissingEntry {
                name: String::from_utf8_lossy(name).into_owned(),
            })
    }

    pub fn get_bool(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<bool, CoerceError> {
        self.entry(name.as_ref()).map(Tag::to_bool)
    }

    pub fn get_byte(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<u8, CoerceError> {
        self.entry(name.as_ref())?.to_byte()
    }

    pub fn get_short(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<i16, CoerceError> {
        self.entry(name.as_ref())?.to_i16()
    }

    pub fn get_int(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<i32, CoerceError> {
        self.entry(name.as_ref())?.to_i32()
    }

    pub fn get_long(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<i64, CoerceError> {
        self.entry(name.as_ref())?.to_i64()
    }

    pub fn get_float(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<f32, CoerceError> {
        self.entry(name.as_ref())?.to_f32()
    }

    pub fn get_double(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<f64, CoerceError> {
        self.entry(name.as_ref())?.to_f64()
    }

    pub fn get_byte_array(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<Vec<u8>, CoerceError> {
        self.entry(name.as_ref())?.to_byte_array()
    }

    /// Строковое представление тега (см. `Display` для [`Tag`]).
    pub fn get_string(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<String, CoerceError> {
        self.entry(name.as_ref()).map(Tag::to_string)
    }

    pub fn get_int_array(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<Vec<i32>, CoerceError> {
        self.entry(name.as_ref())?.to_int_array()
    }

    pub fn get_list(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<&List, CoerceError> {
        let tag = self.entry(name.as_ref())?;
        tag.as_list()
            .ok_or_else(|| CoerceError::not_representable(tag.kind_name(), "List"))
    }

    pub fn get_compound(
        &self,
        name: impl AsRef<[u8]>,
    ) -> Result<&Compound, CoerceError> {
        let tag = self.entry(name.as_ref())?;
        tag.as_compound()
            .ok_or_else(|| CoerceError::not_representable(tag.kind_name(), "Compound"))
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a NbtString, &'a Tag);
    type IntoIter = map::Iter<'a, NbtString, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (NbtString, Tag);
    type IntoIter = map::IntoIter<NbtString, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<NbtString>, V: Into<Tag>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}

impl<K: Into<NbtString>, V: Into<Tag>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        for (name, tag) in iter {
            self.insert(name, tag);
        }
    }
}
