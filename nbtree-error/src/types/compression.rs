use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Тип операции сжатия для контекста ошибки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionOp {
    Compress,
    Decompress,
}

/// Ошибка внешней оболочки сжатия (gzip / zlib).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error("{operation} error ({kind}): {reason}")]
    Failed {
        operation: CompressionOp,
        kind: &'static str,
        reason: String,
    },

    /// Уровень сжатия вне диапазона 0..=9.
    #[error("Invalid compression level {level} (expected 0..=9)")]
    InvalidLevel { level: u32 },
}

impl CompressionError {
    pub fn decompress(
        kind: &'static str,
        err: impl ToString,
    ) -> Self {
        Self::Failed {
            operation: CompressionOp::Decompress,
            kind,
            reason: err.to_string(),
        }
    }

    pub fn compress(
        kind: &'static str,
        err: impl ToString,
    ) -> Self {
        Self::Failed {
            operation: CompressionOp::Compress,
            kind,
            reason: err.to_string(),
        }
    }
}

impl ErrorExt for CompressionError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Failed { .. } => StatusCode::CompressionFailed,
            Self::InvalidLevel { .. } => StatusCode::InvalidArgs,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::Failed { .. } => "Compression/decompression failed".to_string(),
            Self::InvalidLevel { .. } => self.to_string(),
        }
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ];
        if let Self::Failed { operation, kind, .. } = self {
            tags.push(("compression_op", format!("{operation:?}")));
            tags.push(("compression_kind", kind.to_string()));
        }
        tags
    }
}

impl std::fmt::Display for CompressionOp {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Compress => write!(f, "Compression"),
            Self::Decompress => write!(f, "Decompression"),
        }
    }
}
