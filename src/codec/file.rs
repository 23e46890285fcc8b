//! Чтение и запись целых документов: оболочка сжатия плюс поток тегов.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use tracing::debug;

use super::{compression, decode_with, encode_with, NamedTag};
use crate::{config::CodecOptions, error::NbtResult};

/// Разбирает документ из байт.
///
/// Вид оболочки определяется по сигнатуре; `options.compression`
/// используется только при записи.
pub fn from_bytes(
    data: &[u8],
    options: &CodecOptions,
) -> NbtResult<NamedTag> {
    let raw = compression::load(data)?;
    Ok(decode_with(&raw, options)?)
}

/// Сериализует документ и оборачивает его в оболочку из `options`.
pub fn to_bytes(
    named: &NamedTag,
    options: &CodecOptions,
) -> NbtResult<Vec<u8>> {
    let raw = encode_with(named, options)?;
    Ok(compression::wrap(raw, options.compression, options.level)?)
}

/// Читает поток до конца и разбирает документ.
pub fn read_from<R: Read>(
    mut reader: R,
    options: &CodecOptions,
) -> NbtResult<NamedTag> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    from_bytes(&data, options)
}

pub fn read_file(
    path: impl AsRef<Path>,
    options: &CodecOptions,
) -> NbtResult<NamedTag> {
    let path = path.as_ref();
    let named = read_from(BufReader::new(File::open(path)?), options)?;
    debug!(path = %path.display(), kind = %named.kind(), "read document");
    Ok(named)
}

pub fn write_to<W: Write>(
    mut writer: W,
    named: &NamedTag,
    options: &CodecOptions,
) -> NbtResult<()> {
    let bytes = to_bytes(named, options)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

pub fn write_file(
    path: impl AsRef<Path>,
    named: &NamedTag,
    options: &CodecOptions,
) -> NbtResult<()> {
    let path = path.as_ref();
    // Файл создаётся только после успешного кодирования.
    let bytes = to_bytes(named, options)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CompressionKind, Compound, Endian};

    fn sample() -> NamedTag {
        let mut c = Compound::new();
        c.insert("name", "Bananrama");
        c.insert("ints", vec![1i32, 2, 3]);
        NamedTag::new("hello world", c)
    }

    #[test]
    fn test_bytes_roundtrip_each_envelope() {
        for compression in [None, Some(CompressionKind::Gzip), Some(CompressionKind::Zlib)] {
            let options = CodecOptions {
                compression,
                ..CodecOptions::default()
            };
            let bytes = to_bytes(&sample(), &options).unwrap();
            assert_eq!(
                compression::detect_compression(&bytes),
                compression,
                "envelope {compression:?}"
            );
            assert_eq!(from_bytes(&bytes, &options).unwrap(), sample());
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.dat");
        let options = CodecOptions::bedrock();

        write_file(&path, &sample(), &options).unwrap();
        assert_eq!(read_file(&path, &options).unwrap(), sample());

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw[0], 0x0A);
        assert_eq!(options.endian, Endian::Little);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.dat"), &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, crate::error::NbtError::Io(_)));
    }
}
