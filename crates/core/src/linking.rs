//! Linking metadata carried by info objects.

use serde::{Deserialize, Serialize};

/// Linking metadata as evaluated from build configuration.
///
/// The payload is whatever value the configuration supplied for the provider
/// call; the extractor never interprets its contents, it only threads the
/// value through to dependents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkingInfo {
    raw: serde_json::Value,
}

impl LinkingInfo {
    /// Create linking metadata from an evaluated configuration value.
    #[must_use]
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    /// Borrow the underlying configuration value.
    #[must_use]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Consume the metadata, returning the underlying value.
    #[must_use]
    pub fn into_raw(self) -> serde_json::Value {
        self.raw
    }
}
