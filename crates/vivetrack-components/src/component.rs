//! Per-instance tracked-device component
//!
//! One component per node in the host graph. The host invokes `solve` once
//! per cycle with the current runtime snapshot; the component resolves its
//! device, retains the last good placement, and honors its freeze state.

use tracing::{debug, warn};

use vivetrack_core::{
    resolve, DeviceClass, Mesh, PoseCorrection, ResolveError, ResolvedPlacement, RuntimeSnapshot,
};

use crate::assets;
use crate::freeze::FreezeState;
use crate::persist::ComponentState;

/// What one solve cycle emits to the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveOutput {
    /// The emitted placement; `None` only when the instance has never
    /// resolved (or the runtime is not ready and nothing is retained)
    pub placement: Option<ResolvedPlacement>,
    /// The reference mesh under the emitted transform
    pub geometry: Option<Mesh>,
    /// Status text, e.g. "Tracker0"; cleared on warnings
    pub status: Option<String>,
    /// Recoverable diagnostic for the warning surface
    pub warning: Option<ResolveError>,
}

/// A component resolving one tracked device per solve cycle
#[derive(Debug, Clone)]
pub struct TrackedDeviceComponent {
    class: DeviceClass,
    ordinal: usize,
    correction: PoseCorrection,
    reference: Option<Mesh>,
    freeze: FreezeState,
    retained: Option<ResolvedPlacement>,
}

impl TrackedDeviceComponent {
    /// Component for the `ordinal`-th device of `class`, with no reference
    /// geometry and the default correction
    pub fn new(class: DeviceClass, ordinal: usize) -> Self {
        Self {
            class,
            ordinal,
            correction: PoseCorrection::default(),
            reference: None,
            freeze: FreezeState::Live,
            retained: None,
        }
    }

    /// Tracker component carrying the embedded puck mesh
    pub fn tracker(ordinal: usize) -> Self {
        Self::new(DeviceClass::Tracker, ordinal).with_reference(assets::tracker_mesh().clone())
    }

    /// Controller component
    pub fn controller(ordinal: usize) -> Self {
        Self::new(DeviceClass::Controller, ordinal)
    }

    /// HMD component (ordinal 0; runtimes report a single headset)
    pub fn hmd() -> Self {
        Self::new(DeviceClass::Hmd, 0)
    }

    /// Attach a static reference mesh emitted under the resolved transform
    pub fn with_reference(mut self, mesh: Mesh) -> Self {
        self.reference = Some(mesh);
        self
    }

    /// Override the pose correction (e.g. for non-meter working units)
    pub fn with_correction(mut self, correction: PoseCorrection) -> Self {
        self.correction = correction;
        self
    }

    pub fn class(&self) -> DeviceClass {
        self.class
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn freeze_state(&self) -> FreezeState {
        self.freeze
    }

    pub fn is_paused(&self) -> bool {
        self.freeze.is_frozen()
    }

    /// The explicit user toggle: Live <-> Frozen
    pub fn toggle_pause(&mut self) -> FreezeState {
        self.freeze = self.freeze.toggled();
        debug!(class = %self.class, ordinal = self.ordinal, state = ?self.freeze, "pause toggled");
        self.freeze
    }

    /// State to store in the host document
    pub fn save_state(&self) -> ComponentState {
        ComponentState {
            paused: self.freeze.is_frozen(),
        }
    }

    /// Restore state loaded from the host document
    pub fn restore_state(&mut self, state: ComponentState) {
        self.freeze = FreezeState::from_paused(state.paused);
    }

    /// Run one solve cycle
    ///
    /// `None` means the runtime is not yet ready: nothing is emitted, no
    /// warning is raised, and retained state is left untouched. Resolution
    /// failures are warnings: status text is cleared but the previously
    /// retained placement is re-emitted, so downstream keeps stale-but-valid
    /// data instead of going blank. While frozen, resolution still runs (so
    /// errors surface) but the retained placement is never replaced.
    pub fn solve(&mut self, snapshot: Option<&RuntimeSnapshot>) -> SolveOutput {
        let Some(snapshot) = snapshot else {
            return SolveOutput::default();
        };

        match resolve(snapshot, self.class, self.ordinal, &self.correction) {
            Ok(placement) => {
                // First successful resolve seeds the retained placement even
                // when frozen, so a component paused before its first cycle
                // captures the first pose it sees.
                if !self.freeze.is_frozen() || self.retained.is_none() {
                    self.retained = Some(placement);
                }
                let emitted = self.retained.clone();
                SolveOutput {
                    geometry: self.transformed_reference(emitted.as_ref()),
                    placement: emitted,
                    status: Some(format!("{}{}", self.class, self.ordinal)),
                    warning: None,
                }
            }
            Err(err) => {
                warn!(class = %self.class, ordinal = self.ordinal, %err, "resolve failed");
                let emitted = self.retained.clone();
                SolveOutput {
                    geometry: self.transformed_reference(emitted.as_ref()),
                    placement: emitted,
                    status: None,
                    warning: Some(err),
                }
            }
        }
    }

    fn transformed_reference(&self, placement: Option<&ResolvedPlacement>) -> Option<Mesh> {
        match (&self.reference, placement) {
            (Some(mesh), Some(placement)) => Some(mesh.transformed(&placement.transform)),
            _ => None,
        }
    }
}

/// Static lighthouse component: emits the base-station mesh unchanged
/// every cycle
#[derive(Debug, Clone)]
pub struct LighthouseComponent {
    mesh: Mesh,
}

impl LighthouseComponent {
    pub fn new() -> Self {
        Self {
            mesh: assets::lighthouse_mesh().clone(),
        }
    }

    pub fn solve(&self) -> &Mesh {
        &self.mesh
    }
}

impl Default for LighthouseComponent {
    fn default() -> Self {
        Self::new()
    }
}
