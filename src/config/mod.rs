//! Настройки кодека.
//!
//! [`CodecOptions`] передаётся в функции кодека напрямую, [`Settings`]
//! собирает те же значения из файла и переменных окружения `NBTREE_*`.

pub mod options;
pub mod settings;

pub use options::CodecOptions;
pub use settings::{CompressionSetting, Settings, DEFAULT_CONFIG_NAME, ENV_PREFIX};
