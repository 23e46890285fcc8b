//! Разбор бинарного потока тегов в дерево.
//!
//! Каждый тег в потоке кадрирован так: байт вида, имя (u16 длина и байты)
//! и payload. Исключение составляет `End`: за ним не следует ни имени, ни
//! payload'а. Элементы списков записаны без кадра, только payload'ами.
//!
//! Разбор выполняется так: по байту вида создаётся тег нулевого значения
//! ([`construct`]), после чего в него читается payload.

use tracing::{debug, trace};

use super::{construct, Compound, Endian, List, NamedTag, NbtString, Tag, TagKind, TagReader};
use crate::{config::CodecOptions, error::DecodeError};

/// Максимальная вложенность контейнеров по умолчанию.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Декодер над входным срезом.
///
/// Поток может содержать несколько корневых тегов подряд: вызывайте
/// [`Decoder::read_tag`], пока [`Decoder::is_empty`] не вернёт `true`.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    reader: TagReader<'a>,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(
        data: &'a [u8],
        endian: Endian,
    ) -> Self {
        Self {
            reader: TagReader::new(data, endian),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_options(
        data: &'a [u8],
        options: &CodecOptions,
    ) -> Self {
        Self::new(data, options.endian).with_max_depth(options.max_depth)
    }

    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn offset(&self) -> u64 {
        self.reader.offset()
    }

    pub fn remaining(&self) -> u64 {
        self.reader.remaining()
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Читает один корневой тег вместе с именем.
    ///
    /// Корневой `End` возвращается как `NamedTag` с пустым именем и тегом
    /// [`Tag::End`].
    pub fn read_tag(&mut self) -> Result<NamedTag, DecodeError> {
        let start = self.reader.offset();
        let named = match self.read_framed(0)? {
            Some((name, tag)) => NamedTag { name, tag },
            None => NamedTag::default(),
        };
        debug!(
            kind = %named.kind(),
            name = %named.name,
            bytes = self.reader.offset() - start,
            "decoded root tag"
        );
        Ok(named)
    }

    /// Читает все корневые теги до конца входа.
    pub fn read_all(&mut self) -> Result<Vec<NamedTag>, DecodeError> {
        let mut roots = Vec::new();
        while !self.is_empty() {
            roots.push(self.read_tag()?);
        }
        Ok(roots)
    }

    /// Читает кадрированный тег. `None` означает маркер `End`.
    fn read_framed(
        &mut self,
        depth: usize,
    ) -> Result<Option<(NbtString, Tag)>, DecodeError> {
        let offset = self.reader.offset();
        let id = self.reader.read_u8()?;
        let mut tag = construct(id).ok_or(DecodeError::InvalidTagId { id, offset })?;
        if tag == Tag::End {
            return Ok(None);
        }
        let name = self.reader.read_string()?;
        trace!(kind = %tag.kind(), name = %name, offset, "reading tag");
        self.read_payload(&mut tag, depth)?;
        Ok(Some((name, tag)))
    }

    /// Проверяет глубину при входе в контейнер и возвращает новую глубину.
    fn enter(
        &self,
        depth: usize,
    ) -> Result<usize, DecodeError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(DecodeError::DepthLimit {
                depth,
                limit: self.max_depth,
                offset: self.reader.offset(),
            });
        }
        Ok(depth)
    }

    /// Читает длину массива или списка; отрицательная длина является ошибкой.
    fn read_len(
        &mut self,
        what: &'static str,
    ) -> Result<usize, DecodeError> {
        let offset = self.reader.offset();
        let len = self.reader.read_i32()?;
        usize::try_from(len).map_err(|_| DecodeError::InvalidLength {
            what,
            len: len as i64,
            offset,
        })
    }

    /// Читает payload в тег нулевого значения того же вида.
    fn read_payload(
        &mut self,
        tag: &mut Tag,
        depth: usize,
    ) -> Result<(), DecodeError> {
        match tag {
            Tag::End => {}
            Tag::Byte(v) => *v = self.reader.read_i8()?,
            Tag::Short(v) => *v = self.reader.read_i16()?,
            Tag::Int(v) => *v = self.reader.read_i32()?,
            Tag::Long(v) => *v = self.reader.read_i64()?,
            Tag::Float(v) => *v = self.reader.read_f32()?,
            Tag::Double(v) => *v = self.reader.read_f64()?,
            Tag::ByteArray(v) => {
                let len = self.read_len("byte array")?;
                *v = self.reader.take(len)?.to_vec();
            }
            Tag::String(s) => *s = self.reader.read_string()?,
            Tag::List(list) => *list = self.read_list(depth)?,
            Tag::Compound(compound) => *compound = self.read_compound(depth)?,
            Tag::IntArray(v) => {
                let len = self.read_len("int array")?;
                self.reader.ensure(len as u64 * 4)?;
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.reader.read_i32()?);
                }
                *v = values;
            }
        }
        Ok(())
    }

    fn read_list(
        &mut self,
        depth: usize,
    ) -> Result<List, DecodeError> {
        let depth = self.enter(depth)?;
        let kind_offset = self.reader.offset();
        let kind_id = self.reader.read_u8()?;
        let count_offset = self.reader.offset();
        let count = self.read_len("list")?;
        let kind = TagKind::from_id(kind_id).ok_or(DecodeError::InvalidTagId {
            id: kind_id,
            offset: kind_offset,
        })?;
        if kind == TagKind::End && count > 0 {
            return Err(DecodeError::InvalidLength {
                what: "End list",
                len: count as i64,
                offset: count_offset,
            });
        }
        // Каждый элемент занимает хотя бы min_payload_size байт.
        self.reader
            .ensure((count as u64).saturating_mul(kind.min_payload_size() as u64))?;

        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            let mut element = kind.zero_value();
            self.read_payload(&mut element, depth)?;
            elements.push(element);
        }
        Ok(List::from_parts(kind, elements))
    }

    fn read_compound(
        &mut self,
        depth: usize,
    ) -> Result<Compound, DecodeError> {
        let depth = self.enter(depth)?;
        let mut compound = Compound::new();
        while let Some((name, tag)) = self.read_framed(depth)? {
            compound.insert(name, tag);
        }
        Ok(compound)
    }
}

/// Разбирает один корневой тег из начала `data`.
///
/// Байты после корневого тега игнорируются; для потока из нескольких
/// корней используйте [`Decoder`].
pub fn decode(
    data: &[u8],
    endian: Endian,
) -> Result<NamedTag, DecodeError> {
    Decoder::new(data, endian).read_tag()
}

pub fn decode_with(
    data: &[u8],
    options: &CodecOptions,
) -> Result<NamedTag, DecodeError> {
    Decoder::with_options(data, options).read_tag()
}
