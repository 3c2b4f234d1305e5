//! Configuration

use serde::{Deserialize, Serialize};

/// domkit configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Most ancestors the scroll-container walk visits before giving up
    pub max_ancestor_depth: usize,
}

impl Config {
    /// Default ancestor walk bound
    pub const DEFAULT_MAX_ANCESTOR_DEPTH: usize = 4096;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_ancestor_depth: Self::DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"max_ancestor_depth": 16}"#).unwrap();
        assert_eq!(config.max_ancestor_depth, 16);
    }
}
