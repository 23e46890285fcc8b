//! Внешняя оболочка сжатия: gzip или zlib.
//!
//! Сжатие применяется ко всему потоку целиком. При чтении вид оболочки
//! определяется по сигнатуре первых байт, несжатый поток возвращается как
//! есть.

use std::{
    borrow::Cow,
    io::{Read, Write},
};

use flate2::{
    read::{GzDecoder, ZlibDecoder},
    write::{GzEncoder, ZlibEncoder},
    Compression,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompressionError;

/// Сигнатура gzip: ID1, ID2 и метод deflate.
pub const GZIP_MAGIC: [u8; 3] = [0x1F, 0x8B, 0x08];
/// Первый байт заголовка zlib (CMF) для deflate с окном 32 KiB.
pub const ZLIB_MAGIC: u8 = 0x78;

/// Максимальный уровень сжатия.
pub const MAX_LEVEL: u32 = 9;

/// Вид оболочки сжатия.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionKind {
    Gzip,
    Zlib,
}

impl CompressionKind {
    pub const fn name(self) -> &'static str {
        match self {
            CompressionKind::Gzip => "gzip",
            CompressionKind::Zlib => "zlib",
        }
    }
}

/// Уровень сжатия.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Уровень по умолчанию библиотеки сжатия.
    #[default]
    Default,
    /// Явный уровень `0..=9`.
    Level(u32),
}

impl CompressionLevel {
    pub fn validate(self) -> Result<Self, CompressionError> {
        match self {
            CompressionLevel::Level(level) if level > MAX_LEVEL => {
                Err(CompressionError::InvalidLevel { level })
            }
            level => Ok(level),
        }
    }

    fn to_flate2(self) -> Result<Compression, CompressionError> {
        match self.validate()? {
            CompressionLevel::Default => Ok(Compression::default()),
            CompressionLevel::Level(level) => Ok(Compression::new(level)),
        }
    }
}

impl From<Option<u32>> for CompressionLevel {
    fn from(level: Option<u32>) -> Self {
        level.map_or(CompressionLevel::Default, CompressionLevel::Level)
    }
}

/// Определяет вид оболочки по первым байтам потока.
///
/// Проверка gzip выполняется первой; `None` означает несжатый поток.
pub fn detect_compression(data: &[u8]) -> Option<CompressionKind> {
    if data.starts_with(&GZIP_MAGIC) {
        Some(CompressionKind::Gzip)
    } else if data.first() == Some(&ZLIB_MAGIC) {
        Some(CompressionKind::Zlib)
    } else {
        None
    }
}

/// Распаковывает поток указанного вида.
pub fn decompress(
    data: &[u8],
    kind: CompressionKind,
) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::new();
    let result = match kind {
        CompressionKind::Gzip => GzDecoder::new(data).read_to_end(&mut out),
        CompressionKind::Zlib => ZlibDecoder::new(data).read_to_end(&mut out),
    };
    result.map_err(|e| CompressionError::decompress(kind.name(), e))?;
    debug!(kind = kind.name(), compressed = data.len(), raw = out.len(), "decompressed stream");
    Ok(out)
}

/// Сжимает поток в оболочку указанного вида.
pub fn compress(
    data: &[u8],
    kind: CompressionKind,
    level: CompressionLevel,
) -> Result<Vec<u8>, CompressionError> {
    let level = level.to_flate2()?;
    let result = match kind {
        CompressionKind::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), level);
            encoder.write_all(data).and_then(|_| encoder.finish())
        }
        CompressionKind::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), level);
            encoder.write_all(data).and_then(|_| encoder.finish())
        }
    };
    let out = result.map_err(|e| CompressionError::compress(kind.name(), e))?;
    debug!(kind = kind.name(), raw = data.len(), compressed = out.len(), "compressed stream");
    Ok(out)
}

/// Снимает оболочку, если она есть.
///
/// Несжатый вход возвращается заимствованным без копирования.
pub fn load(data: &[u8]) -> Result<Cow<'_, [u8]>, CompressionError> {
    match detect_compression(data) {
        Some(kind) => decompress(data, kind).map(Cow::Owned),
        None => {
            debug!(len = data.len(), "no compression envelope detected");
            Ok(Cow::Borrowed(data))
        }
    }
}

/// Оборачивает поток в оболочку или возвращает его как есть при `None`.
pub fn wrap(
    data: Vec<u8>,
    kind: Option<CompressionKind>,
    level: CompressionLevel,
) -> Result<Vec<u8>, CompressionError> {
    match kind {
        Some(kind) => compress(&data, kind, level),
        None => Ok(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &[u8] = &[0x0A, 0x00, 0x00, 0x00];

    #[test]
    fn test_detection() {
        assert_eq!(
            detect_compression(&[0x1F, 0x8B, 0x08, 0x00]),
            Some(CompressionKind::Gzip)
        );
        assert_eq!(detect_compression(&[0x78, 0x9C]), Some(CompressionKind::Zlib));
        assert_eq!(detect_compression(RAW), None);
        assert_eq!(detect_compression(&[]), None);
        // неполная сигнатура gzip
        assert_eq!(detect_compression(&[0x1F, 0x8B]), None);
    }

    #[test]
    fn test_gzip_envelope() {
        let packed = compress(RAW, CompressionKind::Gzip, CompressionLevel::Default).unwrap();
        assert_eq!(detect_compression(&packed), Some(CompressionKind::Gzip));
        assert_eq!(load(&packed).unwrap().as_ref(), RAW);
    }

    #[test]
    fn test_zlib_envelope_all_levels() {
        for level in 0..=MAX_LEVEL {
            let packed = compress(RAW, CompressionKind::Zlib, CompressionLevel::Level(level)).unwrap();
            assert_eq!(detect_compression(&packed), Some(CompressionKind::Zlib));
            assert_eq!(decompress(&packed, CompressionKind::Zlib).unwrap(), RAW);
        }
    }

    #[test]
    fn test_raw_is_borrowed() {
        assert!(matches!(load(RAW).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_invalid_level() {
        let err = compress(RAW, CompressionKind::Gzip, CompressionLevel::Level(10)).unwrap_err();
        assert_eq!(err, CompressionError::InvalidLevel { level: 10 });
    }

    #[test]
    fn test_corrupt_gzip() {
        let err = load(&[0x1F, 0x8B, 0x08, 0x00, 0x01]).unwrap_err();
        assert!(err.to_string().starts_with("Decompression error (gzip)"));
    }

    #[test]
    fn test_wrap_none_passthrough() {
        let out = wrap(RAW.to_vec(), None, CompressionLevel::Level(99)).unwrap();
        assert_eq!(out, RAW);
    }
}
