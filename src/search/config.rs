//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Prune with alpha-beta bounds.
    /// Visits fewer nodes; the chosen move is the same either way.
    pub alpha_beta: bool,
}

impl SearchConfig {
    /// Enable or disable alpha-beta pruning.
    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.alpha_beta);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_alpha_beta(true);
        assert!(config.alpha_beta);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_alpha_beta(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
