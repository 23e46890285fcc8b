//! Курсор чтения и буфер записи с выбираемым порядком байт.
//!
//! `TagReader` проверяет границы до каждого чтения, так что заявленная в
//! потоке длина никогда не приводит к выделению памяти больше, чем
//! осталось во входе.

use std::io::{Cursor, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};

use super::NbtString;
use crate::error::{DecodeError, EncodeError};

/// Порядок байт многобайтовых чисел и префиксов длины.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    /// Порядок байт Java Edition.
    pub const JAVA: Endian = Endian::Big;
    /// Порядок байт Bedrock Edition.
    pub const BEDROCK: Endian = Endian::Little;
}

macro_rules! read_ordered {
    ($self:ident, $method:ident, $width:expr) => {{
        let bytes = $self.take($width)?;
        Ok(match $self.endian {
            Endian::Big => BigEndian::$method(bytes),
            Endian::Little => LittleEndian::$method(bytes),
        })
    }};
}

macro_rules! write_ordered {
    ($self:ident, $method:ident, $value:expr) => {{
        match $self.endian {
            Endian::Big => $self.buf.$method::<BigEndian>($value)?,
            Endian::Little => $self.buf.$method::<LittleEndian>($value)?,
        }
        Ok(())
    }};
}

/// Курсор над входным срезом.
#[derive(Debug, Clone)]
pub struct TagReader<'a> {
    inner: Cursor<&'a [u8]>,
    endian: Endian,
}

impl<'a> TagReader<'a> {
    pub fn new(
        data: &'a [u8],
        endian: Endian,
    ) -> Self {
        Self {
            inner: Cursor::new(data),
            endian,
        }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Текущее смещение от начала входа.
    pub fn offset(&self) -> u64 {
        self.inner.position()
    }

    /// Количество непрочитанных байт.
    pub fn remaining(&self) -> u64 {
        (self.inner.get_ref().len() as u64).saturating_sub(self.inner.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Проверяет, что во входе осталось не меньше `needed` байт.
    pub fn ensure(
        &self,
        needed: u64,
    ) -> Result<(), DecodeError> {
        let available = self.remaining();
        if available < needed {
            return Err(DecodeError::Truncated {
                needed,
                available,
                offset: self.offset(),
            });
        }
        Ok(())
    }

    /// Забирает следующие `len` байт без копирования.
    pub fn take(
        &mut self,
        len: usize,
    ) -> Result<&'a [u8], DecodeError> {
        self.ensure(len as u64)?;
        let data: &'a [u8] = *self.inner.get_ref();
        let start = self.inner.position() as usize;
        let end = start + len;
        self.inner.set_position(end as u64);
        Ok(&data[start..end])
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        self.read_u8().map(|b| b as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        read_ordered!(self, read_u16, 2)
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        read_ordered!(self, read_i16, 2)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        read_ordered!(self, read_i32, 4)
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        read_ordered!(self, read_i64, 8)
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        read_ordered!(self, read_f32, 4)
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        read_ordered!(self, read_f64, 8)
    }

    /// Читает строку: u16 длина и байты.
    pub fn read_string(&mut self) -> Result<NbtString, DecodeError> {
        let len = self.read_u16()? as usize;
        Ok(NbtString::from(self.take(len)?))
    }
}

/// Буфер записи, растущий по мере сериализации.
#[derive(Debug, Clone, Default)]
pub struct TagWriter {
    buf: Vec<u8>,
    endian: Endian,
}

impl TagWriter {
    pub fn new(endian: Endian) -> Self {
        Self {
            buf: Vec::new(),
            endian,
        }
    }

    pub fn with_capacity(
        capacity: usize,
        endian: Endian,
    ) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            endian,
        }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Очищает буфер, сохраняя выделенную память.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Откатывает буфер к длине `len`.
    pub fn truncate(
        &mut self,
        len: usize,
    ) {
        self.buf.truncate(len);
    }

    pub fn put_u8(
        &mut self,
        v: u8,
    ) -> Result<(), EncodeError> {
        self.buf.write_u8(v)?;
        Ok(())
    }

    pub fn put_i8(
        &mut self,
        v: i8,
    ) -> Result<(), EncodeError> {
        self.buf.write_i8(v)?;
        Ok(())
    }

    pub fn put_u16(
        &mut self,
        v: u16,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_u16, v)
    }

    pub fn put_i16(
        &mut self,
        v: i16,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_i16, v)
    }

    pub fn put_i32(
        &mut self,
        v: i32,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_i32, v)
    }

    pub fn put_i64(
        &mut self,
        v: i64,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_i64, v)
    }

    pub fn put_f32(
        &mut self,
        v: f32,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_f32, v)
    }

    pub fn put_f64(
        &mut self,
        v: f64,
    ) -> Result<(), EncodeError> {
        write_ordered!(self, write_f64, v)
    }

    pub fn put_bytes(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), EncodeError> {
        self.buf.write_all(bytes)?;
        Ok(())
    }

    /// Пишет строку: u16 длина и байты.
    ///
    /// Строка длиннее 65535 байт не помещается в префикс длины.
    pub fn put_string(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), EncodeError> {
        let len = u16::try_from(bytes.len()).map_err(|_| EncodeError::LengthOverflow {
            what: "string",
            len: bytes.len(),
            limit: u16::MAX as usize,
        })?;
        self.put_u16(len)?;
        self.put_bytes(bytes)
    }

    /// Пишет длину массива или списка как i32.
    pub fn put_len(
        &mut self,
        what: &'static str,
        len: usize,
    ) -> Result<(), EncodeError> {
        let len = i32::try_from(len).map_err(|_| EncodeError::LengthOverflow {
            what,
            len,
            limit: i32::MAX as usize,
        })?;
        self.put_i32(len)
    }
}
