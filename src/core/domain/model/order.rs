//! Typed request bodies for the commerce endpoints.
//!
//! Field order mirrors the signing order the provider expects; see the
//! operations in `api::commerce`.

use serde::{Deserialize, Serialize};

/// A new instance order, used for both the price quote and the purchase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewOrderSpec {
    /// Virtual CPU count.
    pub cpu: u32,
    /// Memory in GB.
    pub memory: u32,
    /// Data disk size in GB.
    pub datahd: u32,
    /// OS image identifier (see `list_os`).
    pub os: u32,
    /// Bandwidth in Mbps.
    pub bw: u32,
    /// Number of instances.
    pub order_num: u32,
    /// Billing period unit, as defined by the provider.
    pub period_type: u32,
    /// Number of billing periods.
    pub period_num: u32,
    pub zone_id: String,
}

/// A trial instance order. No billing period, always a single instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrialOrderSpec {
    pub cpu: u32,
    pub memory: u32,
    pub datahd: u32,
    pub os: u32,
    pub bw: u32,
    pub zone_id: String,
}
