//! Provider-agnostic block storage entities.

use serde::{Deserialize, Serialize};

/// A normalized data disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageVolume {
    pub id: String,
    pub name: String,
    /// Size in provider units (GB).
    pub size: u64,
    /// Primary state code, from `diskStatus`.
    pub state: u8,
    pub extra: VolumeExtra,
}

/// Provider metadata carried on a [`StorageVolume`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolumeExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
    pub is_sys_volume: bool,
    pub is_packaged: bool,
    /// Secondary state code, from the stringified `status` field.
    ///
    /// Looked up in the same table as [`StorageVolume::state`] but independently;
    /// the two need not agree.
    pub status: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_name: Option<String>,
}
