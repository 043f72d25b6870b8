//! Raw VM records as returned by the `/api/getVMList` family of endpoints.

use crate::core::domain::value_object::serde_helpers::{opt_scalar_string, string_or_number};
use serde::{Deserialize, Serialize};

/// One entry of `returnObj.VMList`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmRecord {
    /// Provider VM identifier.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    /// Display name.
    #[serde(rename = "vmName")]
    pub vm_name: String,
    /// Lifecycle status string (e.g. "running", "stopped").
    #[serde(rename = "vmStatus", deserialize_with = "string_or_number::deserialize")]
    pub vm_status: String,
    /// Public address, empty or absent when none is bound.
    #[serde(
        rename = "publicIP",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_ip: Option<String>,
    /// Private address, empty or absent when none is assigned.
    #[serde(
        rename = "privateIP",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub private_ip: Option<String>,
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
    #[serde(
        rename = "zoneId",
        default,
        deserialize_with = "opt_scalar_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub zone_id: Option<String>,
}
