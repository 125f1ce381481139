//! Serialized recordings of runtime snapshot sequences
//!
//! A recording is the JSON capture of what the runtime collaborator would
//! have handed over, one frame per polling cycle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use vivetrack_core::{DeviceClass, DeviceTable, RawPose, RuntimeSnapshot, TrackedDevice};

/// A captured sequence of polling cycles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Optional capture label
    #[serde(default)]
    pub name: Option<String>,
    /// One entry per polling cycle, in order
    pub frames: Vec<Frame>,
}

/// The device table contents for one polling cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub devices: Vec<RecordedDevice>,
}

/// One device row in a recorded frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedDevice {
    /// Global table index
    pub index: u32,
    pub class: DeviceClass,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default = "default_connected")]
    pub connected: bool,
    /// Row-major 3x4 pose in runtime coordinates
    pub pose: [[f64; 4]; 3],
}

fn default_connected() -> bool {
    true
}

impl Frame {
    /// Rebuild the runtime snapshot this frame captured
    pub fn to_snapshot(&self) -> RuntimeSnapshot {
        let table: DeviceTable = self
            .devices
            .iter()
            .map(|d| TrackedDevice {
                index: d.index,
                class: d.class,
                serial: d.serial.clone(),
                connected: d.connected,
                pose: RawPose {
                    matrix: d.pose,
                    valid: true,
                },
            })
            .collect();
        RuntimeSnapshot::new(table)
    }
}

impl Recording {
    /// Load a recording from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read recording {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse recording {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_snapshot_buckets_by_class() {
        let json = r#"{
            "frames": [{
                "devices": [
                    {"index": 0, "class": "hmd",
                     "pose": [[1,0,0,0],[0,1,0,0],[0,0,1,0]]},
                    {"index": 2, "class": "tracker",
                     "pose": [[1,0,0,0.5],[0,1,0,1.0],[0,0,1,0]]},
                    {"index": 5, "class": "tracker", "connected": false,
                     "pose": [[1,0,0,0],[0,1,0,0],[0,0,1,0]]}
                ]
            }]
        }"#;
        let recording: Recording = serde_json::from_str(json).unwrap();
        let snapshot = recording.frames[0].to_snapshot();

        assert_eq!(snapshot.registry.indexes_by_class(DeviceClass::Tracker), &[2]);
        assert_eq!(snapshot.registry.indexes_by_class(DeviceClass::Hmd), &[0]);
        assert_eq!(snapshot.table.len(), 3);
    }

    #[test]
    fn test_connected_defaults_to_true() {
        let json = r#"{"index": 1, "class": "tracker",
                       "pose": [[1,0,0,0],[0,1,0,0],[0,0,1,0]]}"#;
        let device: RecordedDevice = serde_json::from_str(json).unwrap();
        assert!(device.connected);
        assert!(device.serial.is_none());
    }
}
