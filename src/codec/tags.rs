//! Идентификаторы видов тегов.
//!
//! Каждый тег в потоке начинается с однобайтового идентификатора вида.
//! Используется в модулях `decode` и `encode`.

use std::fmt;

use num_enum::TryFromPrimitive;

/// Маркер конца `Compound` (payload отсутствует)
pub const TAG_END: u8 = 0x00;
/// Знаковое 8-битное целое
pub const TAG_BYTE: u8 = 0x01;
/// Знаковое 16-битное целое
pub const TAG_SHORT: u8 = 0x02;
/// Знаковое 32-битное целое
pub const TAG_INT: u8 = 0x03;
/// Знаковое 64-битное целое
pub const TAG_LONG: u8 = 0x04;
/// IEEE-754 binary32
pub const TAG_FLOAT: u8 = 0x05;
/// IEEE-754 binary64
pub const TAG_DOUBLE: u8 = 0x06;
/// Массив байт с длиной i32
pub const TAG_BYTE_ARRAY: u8 = 0x07;
/// Строка с длиной u16
pub const TAG_STRING: u8 = 0x08;
/// Однородный список безымянных payload'ов
pub const TAG_LIST: u8 = 0x09;
/// Упорядоченный набор именованных тегов
pub const TAG_COMPOUND: u8 = 0x0A;
/// Массив i32 с длиной i32
pub const TAG_INT_ARRAY: u8 = 0x0B;

/// Вид тега.
///
/// Дискриминант совпадает с идентификатором в бинарном потоке, поэтому
/// преобразование из байта выполняется через `TryFrom<u8>`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive)]
pub enum TagKind {
    End = 0x00,
    Byte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    ByteArray = 0x07,
    String = 0x08,
    List = 0x09,
    Compound = 0x0A,
    IntArray = 0x0B,
}

impl TagKind {
    /// Все виды в порядке возрастания идентификатора.
    pub const ALL: [TagKind; 12] = [
        TagKind::End,
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::List,
        TagKind::Compound,
        TagKind::IntArray,
    ];

    /// Идентификатор вида в бинарном потоке.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Возвращает вид по идентификатору или `None` для неизвестного байта.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::try_from(id).ok()
    }

    /// Каноническое имя вида (`"End"`, `"Byte"`, ..., `"IntArray"`).
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::End => "End",
            TagKind::Byte => "Byte",
            TagKind::Short => "Short",
            TagKind::Int => "Int",
            TagKind::Long => "Long",
            TagKind::Float => "Float",
            TagKind::Double => "Double",
            TagKind::ByteArray => "ByteArray",
            TagKind::String => "String",
            TagKind::List => "List",
            TagKind::Compound => "Compound",
            TagKind::IntArray => "IntArray",
        }
    }

    /// Минимальный размер payload'а этого вида в байтах.
    ///
    /// Используется для проверки заявленного числа элементов списка
    /// до выделения памяти.
    pub const fn min_payload_size(self) -> usize {
        match self {
            TagKind::End => 0,
            TagKind::Byte => 1,
            TagKind::Short | TagKind::String => 2,
            TagKind::Int | TagKind::Float | TagKind::ByteArray | TagKind::IntArray => 4,
            TagKind::Long | TagKind::Double => 8,
            // kind + count
            TagKind::List => 5,
            // хотя бы маркер End
            TagKind::Compound => 1,
        }
    }

    pub const fn is_container(self) -> bool {
        matches!(self, TagKind::List | TagKind::Compound)
    }
}

/// Имя вида по сырому идентификатору; `"Unknown"` для неизвестного байта.
pub fn kind_name(id: u8) -> &'static str {
    TagKind::from_id(id).map_or("Unknown", TagKind::name)
}

impl fmt::Display for TagKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TagKind> for u8 {
    fn from(kind: TagKind) -> Self {
        kind.id()
    }
}
