//! Однородный список безымянных тегов.

use std::slice;

use super::{Tag, TagKind};
use crate::error::ListError;

/// Список тегов одного вида.
///
/// [`List::push`] и [`List::insert`] проверяют вид элемента и не принимают
/// `End`. Доступ через [`List::elements_mut`] и [`List::get_mut`] этого не
/// делает: элемент чужого вида при записи будет пропущен, а заявленное число
/// элементов останется прежним.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element_kind: TagKind,
    elements: Vec<Tag>,
}

impl Default for List {
    fn default() -> Self {
        Self::new(TagKind::End)
    }
}

impl List {
    pub fn new(element_kind: TagKind) -> Self {
        Self {
            element_kind,
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(
        element_kind: TagKind,
        capacity: usize,
    ) -> Self {
        Self {
            element_kind,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Собирает список, проверяя вид каждого элемента.
    pub fn from_tags(
        element_kind: TagKind,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, ListError> {
        let mut list = Self::new(element_kind);
        for tag in tags {
            list.push(tag)?;
        }
        Ok(list)
    }

    /// Собирает список без проверки видов.
    pub(crate) fn from_parts(
        element_kind: TagKind,
        elements: Vec<Tag>,
    ) -> Self {
        Self {
            element_kind,
            elements,
        }
    }

    pub fn element_kind(&self) -> TagKind {
        self.element_kind
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Tag> {
        self.elements.get(index)
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut Tag> {
        self.elements.get_mut(index)
    }

    /// Добавляет элемент в конец.
    ///
    /// Пустой список вида `End` принимает вид первого добавленного элемента.
    pub fn push(
        &mut self,
        tag: impl Into<Tag>,
    ) -> Result<(), ListError> {
        let tag = tag.into();
        self.check_kind(&tag)?;
        self.elements.push(tag);
        Ok(())
    }

    pub fn insert(
        &mut self,
        index: usize,
        tag: impl Into<Tag>,
    ) -> Result<(), ListError> {
        let tag = tag.into();
        if index > self.elements.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            });
        }
        self.check_kind(&tag)?;
        self.elements.insert(index, tag);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Tag> {
        self.elements.pop()
    }

    pub fn remove(
        &mut self,
        index: usize,
    ) -> Option<Tag> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Удаляет все элементы; вид списка сохраняется.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Tag> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Tag] {
        &self.elements
    }

    /// Прямой доступ к элементам без контроля вида.
    pub fn elements_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.elements
    }

    pub fn into_elements(self) -> Vec<Tag> {
        self.elements
    }

    /// Количество элементов, вид которых не совпадает с видом списка.
    pub fn mismatched(&self) -> usize {
        self.elements
            .iter()
            .filter(|tag| tag.kind() != self.element_kind)
            .count()
    }

    fn check_kind(
        &mut self,
        tag: &Tag,
    ) -> Result<(), ListError> {
        let found = tag.kind();
        if found == TagKind::End {
            return Err(ListError::EndElement);
        }
        if found == self.element_kind {
            return Ok(());
        }
        if self.element_kind == TagKind::End && self.elements.is_empty() {
            self.element_kind = found;
            return Ok(());
        }
        Err(ListError::KindMismatch {
            expected: self.element_kind,
            found,
        })
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
