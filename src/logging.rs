use crate::FactoryError;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics configuration. Everything is written to stderr so stdout
/// only carries product output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset or invalid.
    pub level: Level,
    pub show_targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            show_targets: false,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string().to_lowercase()))
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(config: LogConfig) -> Result<(), FactoryError> {
    fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.show_targets)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| FactoryError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_quiet() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.show_targets);
    }

    #[test]
    fn test_with_level() {
        assert_eq!(LogConfig::default().with_level(Level::DEBUG).level, Level::DEBUG);
    }
}
