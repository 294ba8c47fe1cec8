//! Accessor error types.

/// Errors that can occur while setting up a property registry.
///
/// Property lookups themselves never fail: a missing property is `None`.
#[derive(Debug, thiserror::Error)]
pub enum AccessorError {
    /// Failed to read a configuration file.
    #[error("failed to read accessor config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON was malformed or had unknown fields.
    #[error("invalid accessor config: {0}")]
    Config(#[from] serde_json::Error),
}
