//! Tracked-device types as reported by the VR runtime each polling cycle

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Class of a tracked device, used as the registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Head-mounted display
    Hmd,
    /// Hand controller
    Controller,
    /// Standalone tracker puck
    Tracker,
    /// Base station ("lighthouse") — emits, never tracked itself
    Lighthouse,
    /// Slot reported by the runtime with no device attached
    Invalid,
}

impl DeviceClass {
    /// Human-readable label, as shown in component status text
    pub fn label(&self) -> &'static str {
        match self {
            DeviceClass::Hmd => "HMD",
            DeviceClass::Controller => "Controller",
            DeviceClass::Tracker => "Tracker",
            DeviceClass::Lighthouse => "Lighthouse",
            DeviceClass::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown device class: {0}")]
pub struct ParseClassError(String);

impl FromStr for DeviceClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hmd" => Ok(DeviceClass::Hmd),
            "controller" => Ok(DeviceClass::Controller),
            "tracker" => Ok(DeviceClass::Tracker),
            "lighthouse" => Ok(DeviceClass::Lighthouse),
            "invalid" => Ok(DeviceClass::Invalid),
            other => Err(ParseClassError(other.to_string())),
        }
    }
}

/// Raw pose in the runtime's native convention: a 3x4 row-major matrix
/// (rotation basis in the left 3x3, translation in the fourth column),
/// right-handed, Y-up, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPose {
    /// Row-major 3x4 device-to-world matrix
    pub matrix: [[f64; 4]; 3],
    /// Whether the runtime considers this pose valid this cycle
    pub valid: bool,
}

impl RawPose {
    /// Identity pose at the runtime origin
    pub fn identity() -> Self {
        Self {
            matrix: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
            valid: true,
        }
    }

    /// Identity rotation with the given translation, in runtime coordinates
    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            matrix: [
                [1.0, 0.0, 0.0, x],
                [0.0, 1.0, 0.0, y],
                [0.0, 0.0, 1.0, z],
            ],
            valid: true,
        }
    }
}

impl Default for RawPose {
    fn default() -> Self {
        Self::identity()
    }
}

/// A single device in the runtime's global device table
///
/// Refreshed once per polling cycle by the runtime collaborator; read-only
/// to the resolver core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedDevice {
    /// Global table index, stable while the device stays connected
    pub index: u32,
    /// Device class
    pub class: DeviceClass,
    /// Hardware serial, when the runtime reports one
    pub serial: Option<String>,
    /// Whether the device is connected this cycle
    pub connected: bool,
    /// Raw pose in runtime coordinates
    pub pose: RawPose,
}

impl TrackedDevice {
    /// Create a connected device with an identity pose
    pub fn new(index: u32, class: DeviceClass) -> Self {
        Self {
            index,
            class,
            serial: None,
            connected: true,
            pose: RawPose::identity(),
        }
    }

    /// Set the raw pose
    pub fn with_pose(mut self, pose: RawPose) -> Self {
        self.pose = pose;
        self
    }

    /// Set the hardware serial
    pub fn with_serial(mut self, serial: &str) -> Self {
        self.serial = Some(serial.to_string());
        self
    }
}

/// Per-cycle snapshot of the runtime's global device table
///
/// Keyed by global index; iteration follows global-index order, which is
/// the runtime's enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceTable {
    devices: BTreeMap<u32, TrackedDevice>,
}

impl DeviceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            devices: BTreeMap::new(),
        }
    }

    /// Insert or replace a device at its global index
    pub fn insert(&mut self, device: TrackedDevice) {
        self.devices.insert(device.index, device);
    }

    /// Look up a device by global index
    pub fn get(&self, index: u32) -> Option<&TrackedDevice> {
        self.devices.get(&index)
    }

    /// Number of devices in the table
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterate devices in global-index order
    pub fn iter(&self) -> impl Iterator<Item = &TrackedDevice> {
        self.devices.values()
    }
}

impl FromIterator<TrackedDevice> for DeviceTable {
    fn from_iter<T: IntoIterator<Item = TrackedDevice>>(iter: T) -> Self {
        let mut table = Self::new();
        for device in iter {
            table.insert(device);
        }
        table
    }
}
