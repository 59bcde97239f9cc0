use std::time::Duration;

const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Runtime settings for the language server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Quiet period after the last edit before a document is validated
    pub debounce: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let debounce_ms = std::env::var("CONFIG_LSP_DEBOUNCE_MS")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    /// Apply a command-line override on top of the environment
    pub fn with_debounce_ms(mut self, debounce_ms: Option<u64>) -> Self {
        if let Some(ms) = debounce_ms {
            self.debounce = Duration::from_millis(ms);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_debounce() {
        assert_eq!(ServerConfig::default().debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_cli_override() {
        let config = ServerConfig::default().with_debounce_ms(Some(0));
        assert_eq!(config.debounce, Duration::ZERO);

        let config = ServerConfig::default().with_debounce_ms(None);
        assert_eq!(config.debounce, Duration::from_millis(300));
    }
}
