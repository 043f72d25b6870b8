//! Conversion of raw provider records into normalized entities.

use crate::core::domain::{
    error::{CtyunError, CtyunResult},
    model::{
        disk::DiskRecord,
        node::{Node, NodeExtra},
        state::{node_state, volume_state},
        vm::VmRecord,
        volume::{StorageVolume, VolumeExtra},
    },
    value_object::serde_helpers::scalar_to_string,
};

/// Wraps a present, non-empty address in a one-element list.
fn ip_list(ip: Option<&str>) -> Vec<String> {
    match ip {
        Some(ip) if !ip.is_empty() => vec![ip.to_string()],
        _ => Vec::new(),
    }
}

/// Converts a raw VM record into a [`Node`].
///
/// # Errors
/// [`CtyunError::UnmappedState`] when `vmStatus` is not in the node-state table.
pub fn to_node(record: &VmRecord) -> CtyunResult<Node> {
    Ok(Node {
        id: record.id.clone(),
        name: record.vm_name.clone(),
        state: node_state(&record.vm_status)?,
        public_ips: ip_list(record.public_ip.as_deref()),
        private_ips: ip_list(record.private_ip.as_deref()),
        extra: NodeExtra {
            apply_date: record.apply_date.clone(),
            due_date: record.due_date.clone(),
            zone_id: record.zone_id.clone(),
        },
    })
}

/// Maps every record in order. The first unmapped state aborts the whole list.
pub fn to_nodes(records: &[VmRecord]) -> CtyunResult<Vec<Node>> {
    records.iter().map(to_node).collect()
}

/// Converts a raw disk record into a [`StorageVolume`].
///
/// `diskStatus` gives the primary state and the stringified `status` gives
/// the secondary one. Both go through the volume-state table independently.
///
/// # Errors
/// [`CtyunError::UnmappedState`] when either status is not in the volume-state table.
pub fn to_volume(record: &DiskRecord) -> CtyunResult<StorageVolume> {
    let state = volume_state(&record.disk_status)?;
    let raw_status =
        scalar_to_string(&record.status).ok_or_else(|| CtyunError::UnmappedState {
            table: "volume",
            value: "null".to_string(),
        })?;
    let status = volume_state(&raw_status)?;

    Ok(StorageVolume {
        id: record.id.clone(),
        name: record.disk_name.clone(),
        size: record.disk_size,
        state,
        extra: VolumeExtra {
            disk_id: record.disk_id.clone(),
            is_sys_volume: record.is_sys_volume,
            is_packaged: record.is_packaged,
            status,
            apply_date: record.apply_date.clone(),
            due_date: record.due_date.clone(),
            vm_name: record.vm_name.clone(),
        },
    })
}

pub fn to_volumes(records: &[DiskRecord]) -> CtyunResult<Vec<StorageVolume>> {
    records.iter().map(to_volume).collect()
}
