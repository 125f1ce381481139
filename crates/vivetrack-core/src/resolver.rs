//! Pose resolver - from (class, ordinal) request to a resolved placement
//!
//! The resolver is pure: it reads the injected snapshot, converts and
//! corrects the matching device's pose, and returns the placement or a
//! recoverable diagnostic. It caches nothing; retention is the caller's
//! concern.

use nalgebra::Matrix4;
use thiserror::Error;

use crate::device::DeviceClass;
use crate::plane::Plane;
use crate::pose::PoseCorrection;
use crate::registry::RuntimeSnapshot;

/// Recoverable resolution failures, surfaced to the user as warnings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No connected device of the requested class this cycle
    #[error("no {class} detected")]
    NoDeviceDetected { class: DeviceClass },
    /// Requested ordinal exceeds the connected count
    #[error("index {ordinal} exceeds the {connected} {class} device(s) detected")]
    IndexOutOfRange {
        class: DeviceClass,
        ordinal: usize,
        connected: usize,
    },
}

/// Output of one resolution: the corrected transform and the plane it
/// implies
///
/// Ephemeral - recomputed every cycle unless the owning component is
/// frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlacement {
    /// Corrected device-to-world transform in working units
    pub transform: Matrix4<f64>,
    /// The world-XY reference plane under that transform
    pub plane: Plane,
}

/// Resolve the `ordinal`-th connected device of `class` into a placement
///
/// Ordinals are 0-based ranks among same-class devices, distinct from the
/// global table index: with trackers at global indices `[2, 5]`, ordinal 0
/// resolves global index 2.
pub fn resolve(
    snapshot: &RuntimeSnapshot,
    class: DeviceClass,
    ordinal: usize,
    correction: &PoseCorrection,
) -> Result<ResolvedPlacement, ResolveError> {
    let indices = snapshot.registry.indexes_by_class(class);
    if indices.is_empty() {
        return Err(ResolveError::NoDeviceDetected { class });
    }
    if ordinal > indices.len() - 1 {
        return Err(ResolveError::IndexOutOfRange {
            class,
            ordinal,
            connected: indices.len(),
        });
    }

    let global_index = indices[ordinal];
    // The registry invariant guarantees the device exists and is connected;
    // a stale snapshot degrades to a warning rather than a panic.
    let device = snapshot
        .table
        .get(global_index)
        .filter(|d| d.connected)
        .ok_or(ResolveError::NoDeviceDetected { class })?;

    let transform = correction.corrected_matrix(&device.pose);
    let plane = Plane::world_xy().transformed(&transform);

    Ok(ResolvedPlacement { transform, plane })
}
