//! Freeze ("pause") state machine
//!
//! Two states, one explicit user-initiated transition. While `Frozen` the
//! component keeps resolving (so disconnects and index errors still
//! surface) but re-emits its retained placement unchanged.

use serde::{Deserialize, Serialize};

/// Live/Frozen state of a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreezeState {
    /// Emitted output tracks each cycle's freshly resolved placement
    Live,
    /// Emitted output is pinned to the placement retained at freeze time
    Frozen,
}

impl Default for FreezeState {
    fn default() -> Self {
        Self::Live
    }
}

impl FreezeState {
    /// The state after one toggle action
    pub fn toggled(self) -> Self {
        match self {
            FreezeState::Live => FreezeState::Frozen,
            FreezeState::Frozen => FreezeState::Live,
        }
    }

    pub fn is_frozen(self) -> bool {
        matches!(self, FreezeState::Frozen)
    }

    /// Map the persisted boolean flag to a state
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            FreezeState::Frozen
        } else {
            FreezeState::Live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_live() {
        assert_eq!(FreezeState::default(), FreezeState::Live);
        assert!(!FreezeState::default().is_frozen());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(FreezeState::Live.toggled(), FreezeState::Frozen);
        assert_eq!(FreezeState::Frozen.toggled(), FreezeState::Live);
        assert_eq!(FreezeState::Live.toggled().toggled(), FreezeState::Live);
    }

    #[test]
    fn test_from_paused_flag() {
        assert_eq!(FreezeState::from_paused(true), FreezeState::Frozen);
        assert_eq!(FreezeState::from_paused(false), FreezeState::Live);
    }
}
