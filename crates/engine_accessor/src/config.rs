//! Registry configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AccessorError;

/// How destroy listeners treat a slot whose value was overwritten.
///
/// A slot only gets a destroy listener when it is first filled. Overwriting
/// the slot leaves the earlier value's listener attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleListenerPolicy {
    /// A listener clears its slot whenever it fires, even if the slot now
    /// holds a newer value. Values stored by overwrite get no listener of
    /// their own; they read as absent once destroyed.
    #[default]
    Compatible,
    /// Every stored value gets a listener, and a listener only clears the
    /// slot while the slot still holds the value that fired.
    Guarded,
}

/// Configuration for a [`PropertyRegistry`](crate::PropertyRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessorConfig {
    /// Overwrite handling for destroy listeners.
    pub stale_listener_policy: StaleListenerPolicy,
}

impl AccessorConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the stale listener policy.
    #[must_use]
    pub fn with_stale_listener_policy(mut self, policy: StaleListenerPolicy) -> Self {
        self.stale_listener_policy = policy;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AccessorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AccessorError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_compatible() {
        assert_eq!(
            AccessorConfig::new().stale_listener_policy,
            StaleListenerPolicy::Compatible
        );
    }

    #[test]
    fn test_builder_overrides_policy() {
        let policy = StaleListenerPolicy::Guarded;
        let config = AccessorConfig::new().with_stale_listener_policy(policy);
        assert_eq!(config.stale_listener_policy, StaleListenerPolicy::Guarded);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{ "stale_listener_policy": "guarded" }"#;
        let config = AccessorConfig::from_json_str(json).unwrap();
        assert_eq!(config.stale_listener_policy, StaleListenerPolicy::Guarded);

        let empty = AccessorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, AccessorConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let json = r#"{ "stale_policy": "guarded" }"#;
        let err = AccessorConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, AccessorError::Config(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let json = r#"{ "stale_listener_policy": "strict" }"#;
        let err = AccessorConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, AccessorError::Config(_)));
    }

    #[test]
    fn test_from_path() {
        let name = format!("accessor-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, r#"{ "stale_listener_policy": "compatible" }"#).unwrap();
        let config = AccessorConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.stale_listener_policy, StaleListenerPolicy::Compatible);
    }

    #[test]
    fn test_from_missing_path() {
        let err = AccessorConfig::from_path("/nonexistent/accessor.json").unwrap_err();
        assert!(matches!(err, AccessorError::Io(_)));
    }
}
