//! Analyzer configuration

use tracing::warn;

/// Environment variable overriding [`AnalyzerConfig::max_input_bytes`]
pub const MAX_LOG_BYTES_ENV: &str = "VGCSCOPE_MAX_LOG_BYTES";

/// Default input ceiling: 16 MiB, far above any real battle log
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Limits applied by [`LogAnalyzer`](crate::LogAnalyzer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Inputs longer than this many bytes are rejected
    pub max_input_bytes: usize,
}

impl AnalyzerConfig {
    /// Read the configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(MAX_LOG_BYTES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_input_bytes = limit,
                _ => warn!(
                    value = %raw,
                    "ignoring invalid {}; using default", MAX_LOG_BYTES_ENV
                ),
            }
        }

        config
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::default().with_max_input_bytes(1024);
        assert_eq!(config.max_input_bytes, 1024);
    }
}
