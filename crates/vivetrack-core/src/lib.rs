//! ViveTrack Core - Tracked-device types, registry, and pose resolution
//!
//! This crate provides the foundational types for the ViveTrack system:
//! - Tracked-device model for runtime-reported hardware (HMD, controllers,
//!   trackers, lighthouses)
//! - Device registry mapping device classes to global table indices
//! - Pose conversion and the fixed axis/scale correction into the consuming
//!   system's Z-up world-XY convention
//! - The pose resolver turning (class, ordinal) requests into placements

pub mod device;
pub mod mesh;
pub mod plane;
pub mod pose;
pub mod registry;
pub mod resolver;

pub use device::{DeviceClass, DeviceTable, ParseClassError, RawPose, TrackedDevice};
pub use mesh::Mesh;
pub use plane::Plane;
pub use pose::PoseCorrection;
pub use registry::{DeviceRegistry, RuntimeSnapshot};
pub use resolver::{resolve, ResolveError, ResolvedPlacement};
