//! Raw data disk records as returned by the `/api/getDatadiskList` family of endpoints.

use crate::core::domain::value_object::serde_helpers::{
    flexible_bool, integer_size, opt_scalar_string, string_or_number,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `returnObj.DiskList`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiskRecord {
    /// Record identifier.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    #[serde(rename = "diskName")]
    pub disk_name: String,
    /// Binding status word (e.g. "bind", "unbind").
    #[serde(rename = "diskStatus", deserialize_with = "string_or_number::deserialize")]
    pub disk_status: String,
    /// Size in provider units (GB).
    #[serde(rename = "diskSize", deserialize_with = "integer_size::deserialize")]
    pub disk_size: u64,
    /// Provider-side disk identifier, distinct from `id`.
    #[serde(
        rename = "diskId",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub disk_id: Option<String>,
    #[serde(rename = "isSysVolume", default, deserialize_with = "flexible_bool::deserialize")]
    pub is_sys_volume: bool,
    #[serde(rename = "isPackaged", default, deserialize_with = "flexible_bool::deserialize")]
    pub is_packaged: bool,
    /// Secondary status; arrives as a number or a string and is looked up in stringified form.
    pub status: Value,
    #[serde(
        rename = "applyDate",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub apply_date: Option<String>,
    #[serde(
        rename = "dueDate",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<String>,
    /// Name of the VM the disk is bound to, if any.
    #[serde(
        rename = "vmName",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub vm_name: Option<String>,
}
