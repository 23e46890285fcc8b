use crate::{
    codec::{CompressionKind, CompressionLevel, Endian, DEFAULT_MAX_DEPTH},
    error::{NbtError, NbtResult},
};

/// Параметры разбора и сериализации документа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Порядок байт чисел и префиксов длины.
    pub endian: Endian,
    /// Максимальная вложенность контейнеров.
    pub max_depth: usize,
    /// Оболочка при записи; `None` пишет поток без сжатия.
    pub compression: Option<CompressionKind>,
    pub level: CompressionLevel,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            max_depth: DEFAULT_MAX_DEPTH,
            compression: Some(CompressionKind::Gzip),
            level: CompressionLevel::Default,
        }
    }
}

impl CodecOptions {
    /// Java Edition: big-endian, gzip.
    pub fn java() -> Self {
        Self::default()
    }

    /// Bedrock Edition: little-endian, без сжатия.
    pub fn bedrock() -> Self {
        Self {
            endian: Endian::Little,
            compression: None,
            ..Self::default()
        }
    }

    pub fn with_endian(
        mut self,
        endian: Endian,
    ) -> Self {
        self.endian = endian;
        self
    }

    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_compression(
        mut self,
        compression: Option<CompressionKind>,
    ) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_level(
        mut self,
        level: CompressionLevel,
    ) -> Self {
        self.level = level;
        self
    }

    /// Проверяет согласованность значений.
    pub fn validate(self) -> NbtResult<Self> {
        if self.max_depth == 0 {
            return Err(NbtError::invalid_config("max_depth must be at least 1"));
        }
        self.level.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let java = CodecOptions::java();
        assert_eq!(java.endian, Endian::JAVA);
        assert_eq!(java.compression, Some(CompressionKind::Gzip));
        assert_eq!(java.max_depth, 512);

        let bedrock = CodecOptions::bedrock();
        assert_eq!(bedrock.endian, Endian::BEDROCK);
        assert_eq!(bedrock.compression, None);
    }

    #[test]
    fn test_validate() {
        assert!(CodecOptions::default().validate().is_ok());
        assert!(CodecOptions::default().with_max_depth(0).validate().is_err());
        let err = CodecOptions::default()
            .with_level(CompressionLevel::Level(11))
            .validate()
            .unwrap_err();
        assert!(matches!(err, NbtError::Compression(_)));
    }
}
