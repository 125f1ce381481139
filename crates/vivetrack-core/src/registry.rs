//! Device registry - class-keyed view of the global device table
//!
//! The registry is rebuilt from the table once per polling cycle and passed
//! into each evaluation explicitly. It is never held as ambient global
//! state, and the resolver only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::device::{DeviceClass, DeviceTable};

/// Mapping from device class to the ordered global indices of the connected
/// devices of that class
///
/// Order is the runtime's enumeration order (ascending global index). It is
/// not guaranteed stable across reconnects: a device that drops and returns
/// may come back under a different global index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRegistry {
    by_class: HashMap<DeviceClass, Vec<u32>>,
}

impl DeviceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            by_class: HashMap::new(),
        }
    }

    /// Build the registry for one cycle from a device table
    ///
    /// Disconnected devices are skipped, so a disconnect removes the
    /// class-list entry on the next cycle. Every index the registry holds
    /// refers to a connected device in `table`.
    pub fn from_table(table: &DeviceTable) -> Self {
        let mut by_class: HashMap<DeviceClass, Vec<u32>> = HashMap::new();
        for device in table.iter() {
            if !device.connected {
                continue;
            }
            by_class.entry(device.class).or_default().push(device.index);
        }
        Self { by_class }
    }

    /// Ordered global indices for a class; empty when no device of that
    /// class is connected this cycle
    pub fn indexes_by_class(&self, class: DeviceClass) -> &[u32] {
        self.by_class.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of connected devices of a class
    pub fn connected_count(&self, class: DeviceClass) -> usize {
        self.indexes_by_class(class).len()
    }
}

/// The one value the runtime collaborator hands over each cycle: the device
/// table plus the registry derived from it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    pub table: DeviceTable,
    pub registry: DeviceRegistry,
}

impl RuntimeSnapshot {
    /// Snapshot a device table, deriving the class registry from it
    pub fn new(table: DeviceTable) -> Self {
        let registry = DeviceRegistry::from_table(&table);
        Self { table, registry }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::TrackedDevice;

    fn table_with_trackers_at(indices: &[u32]) -> DeviceTable {
        indices
            .iter()
            .map(|&i| TrackedDevice::new(i, DeviceClass::Tracker))
            .collect()
    }

    #[test]
    fn test_registry_buckets_by_class_in_index_order() {
        let mut table = table_with_trackers_at(&[5, 2]);
        table.insert(TrackedDevice::new(0, DeviceClass::Hmd));
        table.insert(TrackedDevice::new(3, DeviceClass::Controller));

        let registry = DeviceRegistry::from_table(&table);
        assert_eq!(registry.indexes_by_class(DeviceClass::Tracker), &[2, 5]);
        assert_eq!(registry.indexes_by_class(DeviceClass::Hmd), &[0]);
        assert_eq!(registry.indexes_by_class(DeviceClass::Controller), &[3]);
        assert_eq!(registry.connected_count(DeviceClass::Tracker), 2);
    }

    #[test]
    fn test_registry_empty_for_absent_class() {
        let registry = DeviceRegistry::from_table(&table_with_trackers_at(&[1]));
        assert!(registry.indexes_by_class(DeviceClass::Controller).is_empty());
    }

    #[test]
    fn test_registry_skips_disconnected_devices() {
        let mut table = table_with_trackers_at(&[2, 5]);
        let mut dropped = TrackedDevice::new(5, DeviceClass::Tracker);
        dropped.connected = false;
        table.insert(dropped);

        let registry = DeviceRegistry::from_table(&table);
        assert_eq!(registry.indexes_by_class(DeviceClass::Tracker), &[2]);
    }

    #[test]
    fn test_snapshot_derives_registry() {
        let snapshot = RuntimeSnapshot::new(table_with_trackers_at(&[2, 5]));
        assert_eq!(snapshot.registry.indexes_by_class(DeviceClass::Tracker), &[2, 5]);
        assert_eq!(snapshot.table.len(), 2);
    }
}
