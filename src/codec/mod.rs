//! Кодек формата NBT: древовидные именованные бинарные теги.
//!
//! ## Пример
//!
//! ```
//! use nbtree::codec::{decode, encode, Compound, Endian, NamedTag};
//!
//! let mut root = Compound::new();
//! root.insert("name", "Bananrama");
//! root.insert("level", 7i32);
//!
//! let bytes = encode(&NamedTag::new("hello world", root), Endian::Big)?;
//! let back = decode(&bytes, Endian::Big)?;
//! assert_eq!(back.compound().unwrap().get_int("level")?, 7);
//! # Ok::<(), nbtree::error::NbtError>(())
//! ```
//!
//! ## Модули
//!
//! - [`tags`]: идентификаторы видов тегов
//! - [`tag`]: дерево тегов и диспетчеризация по виду
//! - [`cursor`]: чтение и запись чисел с выбранным порядком байт
//! - [`decode`] / [`encode`]: разбор и сериализация потока
//! - [`coerce`]: приведение тегов к значениям Rust
//! - [`compression`]: оболочка gzip / zlib
//! - [`file`]: чтение и запись документов целиком

pub mod coerce;
pub mod compound;
pub mod compression;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod file;
pub mod list;
pub mod string;
pub mod tag;
pub mod tags;

pub use compound::Compound;
pub use compression::{
    compress, decompress, detect_compression, load, CompressionKind, CompressionLevel,
};
pub use cursor::{Endian, TagReader, TagWriter};
pub use decode::{decode, decode_with, Decoder, DEFAULT_MAX_DEPTH};
pub use encode::{encode, encode_with, Encoder};
pub use list::List;
pub use string::NbtString;
pub use tag::{construct, NamedTag, Tag};
pub use tags::*;
