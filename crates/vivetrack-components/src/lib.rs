//! ViveTrack Components - the per-instance solve-cycle layer
//!
//! Each component is one node in the host graph: it owns its freeze state
//! and last-retained placement, gets the runtime snapshot injected per
//! solve, and emits placement, geometry, status text, and warnings. The
//! host environment drives it single-threaded and pull-based, once per
//! solve cycle.

pub mod assets;
pub mod component;
pub mod freeze;
pub mod persist;

pub use assets::{lighthouse_mesh, tracker_mesh, AssetError};
pub use component::{LighthouseComponent, SolveOutput, TrackedDeviceComponent};
pub use freeze::FreezeState;
pub use persist::ComponentState;
