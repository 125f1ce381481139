//! Persisted per-instance component state
//!
//! The host document serializes one boolean per component instance. A
//! document written before the flag existed simply omits it, so absence
//! must deserialize to `false`.

use serde::{Deserialize, Serialize};

/// State stored alongside a component instance in the host document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentState {
    /// Whether the instance was frozen when the document was saved
    #[serde(default)]
    pub paused: bool,
}

impl ComponentState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
