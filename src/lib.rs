/// NBT codec: tag tree, binary cursor, decoder/encoder, compression envelope.
pub mod codec;
/// Codec options and settings loading.
pub mod config;
/// Error types: decoding, encoding, coercion, compression.
pub mod error;
/// Logging setup (formatting, filters).
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Tag tree and codec entry points.
pub use codec::{
    construct, decode, decode_with, encode, encode_with, kind_name, Compound, CompressionKind,
    CompressionLevel, Decoder, Encoder, Endian, List, NamedTag, NbtString, Tag, TagKind,
};
/// Whole-document helpers.
pub use codec::file::{read_file, read_from, write_file, write_to};
/// Codec options and settings.
pub use config::{CodecOptions, Settings};
/// Operation errors and result types.
pub use error::{
    CoerceError, CompressionError, DecodeError, EncodeError, ErrorExt, ListError, NbtError,
    NbtResult, StatusCode,
};
/// Logging initialization.
pub use logging::{init_logging, LoggingConfig};
