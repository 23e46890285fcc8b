use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use super::CodecOptions;
use crate::{
    codec::{CompressionKind, CompressionLevel, Endian, DEFAULT_MAX_DEPTH},
    error::{NbtError, NbtResult},
    logging::LoggingConfig,
};

/// Имя необязательного файла конфигурации (`nbtree.toml`, `nbtree.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "nbtree";
/// Префикс переменных окружения.
pub const ENV_PREFIX: &str = "NBTREE";

/// Оболочка сжатия в конфигурации; `none` означает запись без сжатия.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionSetting {
    None,
    Gzip,
    Zlib,
}

impl From<CompressionSetting> for Option<CompressionKind> {
    fn from(setting: CompressionSetting) -> Self {
        match setting {
            CompressionSetting::None => None,
            CompressionSetting::Gzip => Some(CompressionKind::Gzip),
            CompressionSetting::Zlib => Some(CompressionKind::Zlib),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub endian: Endian,
    pub max_depth: usize,
    pub compression: CompressionSetting,
    /// Уровень сжатия `0..=9`; отсутствие означает уровень по умолчанию.
    pub level: Option<u32>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Загружает настройки: значения по умолчанию, затем необязательный
    /// `nbtree.*` в текущем каталоге, затем переменные `NBTREE_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// То же, что [`Settings::load`], но файл задан явно и обязателен.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Добавляем значения по умолчанию
            .set_default("endian", "big")?
            .set_default("max_depth", DEFAULT_MAX_DEPTH as u64)?
            .set_default("compression", "gzip")
    }

    /// Проверенные параметры кодека.
    pub fn codec_options(&self) -> NbtResult<CodecOptions> {
        if let Some(level) = self.level {
            if level > crate::codec::compression::MAX_LEVEL {
                return Err(NbtError::invalid_config(format!(
                    "compression level {level} is out of range 0..=9"
                )));
            }
        }
        CodecOptions {
            endian: self.endian,
            max_depth: self.max_depth,
            compression: self.compression.into(),
            level: CompressionLevel::from(self.level),
        }
        .validate()
    }
}

/// Переменные окружения с префиксом `NBTREE_`; вложенные ключи
/// разделяются `__` (`NBTREE_LOGGING__LEVEL`).
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
