//! Сериализация дерева тегов в бинарный поток.
//!
//! Формат кадра совпадает с разбором в [`super::decode`]: байт вида, имя,
//! payload. `Compound` завершается байтом `End`, элементы списка пишутся
//! без кадра.

use tracing::{debug, trace, warn};

use super::{
    coerce::describe, decode::DEFAULT_MAX_DEPTH, Compound, Endian, List, NamedTag, Tag, TagKind,
    TagWriter, TAG_END,
};
use crate::{config::CodecOptions, error::EncodeError};

/// Энкодер, накапливающий байты во внутреннем буфере.
///
/// Несколько вызовов [`Encoder::write_tag`] дают поток из нескольких
/// корневых тегов.
#[derive(Debug, Clone)]
pub struct Encoder {
    writer: TagWriter,
    max_depth: usize,
}

impl Encoder {
    pub fn new(endian: Endian) -> Self {
        Self {
            writer: TagWriter::new(endian),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_options(options: &CodecOptions) -> Self {
        Self::new(options.endian).with_max_depth(options.max_depth)
    }

    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Записанные байты.
    pub fn bytes(&self) -> &[u8] {
        self.writer.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    /// Очищает буфер для повторного использования.
    pub fn reset(&mut self) {
        self.writer.clear();
    }

    /// Пишет корневой тег с кадром.
    ///
    /// Корневой [`Tag::End`] записывается одним байтом вида, без имени.
    /// При ошибке буфер откатывается к состоянию до вызова.
    pub fn write_tag(
        &mut self,
        named: &NamedTag,
    ) -> Result<(), EncodeError> {
        let start = self.writer.len();
        let result = self.write_framed(named.name.as_bytes(), &named.tag, 0);
        match &result {
            Ok(()) => debug!(
                kind = %named.kind(),
                name = %named.name,
                bytes = self.writer.len() - start,
                "encoded root tag"
            ),
            Err(_) => self.writer.truncate(start),
        }
        result
    }

    fn write_framed(
        &mut self,
        name: &[u8],
        tag: &Tag,
        depth: usize,
    ) -> Result<(), EncodeError> {
        self.writer.put_u8(tag.id())?;
        if let Tag::End = tag {
            return Ok(());
        }
        self.writer.put_string(name)?;
        trace!(tag = %describe(tag), name = %String::from_utf8_lossy(name), "writing tag");
        self.write_payload(tag, depth)
    }

    fn enter(
        &self,
        depth: usize,
    ) -> Result<usize, EncodeError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(EncodeError::DepthLimit {
                depth,
                limit: self.max_depth,
            });
        }
        Ok(depth)
    }

    fn write_payload(
        &mut self,
        tag: &Tag,
        depth: usize,
    ) -> Result<(), EncodeError> {
        match tag {
            Tag::End => Ok(()),
            Tag::Byte(v) => self.writer.put_i8(*v),
            Tag::Short(v) => self.writer.put_i16(*v),
            Tag::Int(v) => self.writer.put_i32(*v),
            Tag::Long(v) => self.writer.put_i64(*v),
            Tag::Float(v) => self.writer.put_f32(*v),
            Tag::Double(v) => self.writer.put_f64(*v),
            Tag::ByteArray(v) => {
                self.writer.put_len("byte array", v.len())?;
                self.writer.put_bytes(v)
            }
            Tag::String(s) => self.writer.put_string(s.as_bytes()),
            Tag::List(list) => self.write_list(list, depth),
            Tag::Compound(compound) => self.write_compound(compound, depth),
            Tag::IntArray(v) => {
                self.writer.put_len("int array", v.len())?;
                for value in v {
                    self.writer.put_i32(*value)?;
                }
                Ok(())
            }
        }
    }

    /// Пишет вид, заявленное число элементов и payload'ы.
    ///
    /// Элементы чужого вида пропускаются, но в счётчике остаются, поэтому
    /// такой поток не разберётся обратно. Непустой список вида `End`
    /// отклоняется.
    fn write_list(
        &mut self,
        list: &List,
        depth: usize,
    ) -> Result<(), EncodeError> {
        let depth = self.enter(depth)?;
        let kind = list.element_kind();
        if kind == TagKind::End && !list.is_empty() {
            return Err(EncodeError::EndListElements { len: list.len() });
        }
        self.writer.put_u8(kind.id())?;
        self.writer.put_len("list", list.len())?;

        let mut skipped = 0usize;
        for element in list {
            if element.kind() != kind {
                skipped += 1;
                continue;
            }
            self.write_payload(element, depth)?;
        }
        if skipped > 0 {
            warn!(
                element_kind = %kind,
                declared = list.len(),
                skipped,
                "list elements of a foreign kind were skipped"
            );
        }
        Ok(())
    }

    fn write_compound(
        &mut self,
        compound: &Compound,
        depth: usize,
    ) -> Result<(), EncodeError> {
        let depth = self.enter(depth)?;
        for (name, tag) in compound {
            if let Tag::End = tag {
                return Err(EncodeError::EndMember {
                    name: name.to_string(),
                });
            }
            self.write_framed(name.as_bytes(), tag, depth)?;
        }
        self.writer.put_u8(TAG_END)
    }
}

/// Сериализует корневой тег в новый буфер.
pub fn encode(
    named: &NamedTag,
    endian: Endian,
) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::new(endian);
    encoder.write_tag(named)?;
    Ok(encoder.into_bytes())
}

pub fn encode_with(
    named: &NamedTag,
    options: &CodecOptions,
) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::with_options(options);
    encoder.write_tag(named)?;
    Ok(encoder.into_bytes())
}
