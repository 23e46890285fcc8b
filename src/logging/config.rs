use serde::{Deserialize, Serialize};

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень (`"info"`) или полная директива (`"nbtree=trace,warn"`).
    pub level: String,
    pub format: LogFormat,
    pub with_target: bool,
    pub with_ansi: bool,
    pub with_line_numbers: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            with_target: true,
            with_ansi: true,
            with_line_numbers: false,
        }
    }
}

impl LoggingConfig {
    /// Директива для `EnvFilter`.
    ///
    /// Голый уровень относится только к событиям этого крейта.
    pub fn build_filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.contains('=') || level.contains(',') {
            level.to_string()
        } else {
            format!("{}={level}", env!("CARGO_CRATE_NAME"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.build_filter_directive(), "nbtree=info");

        config.level = "nbtree::codec=trace,warn".to_string();
        assert_eq!(config.build_filter_directive(), "nbtree::codec=trace,warn");
    }
}
