//! Static lookup tables translating provider status strings into state codes.

use crate::core::domain::error::{CtyunError, CtyunResult};

/// `vmStatus` string to node state code.
pub const NODE_STATE: [(&str, u8); 7] = [
    ("starting", 10),
    ("running", 0),
    ("restarting", 1),
    ("stopped", 5),
    ("stopping", 11),
    ("restoreing", 12),
    ("dueed", 9),
];

/// `diskStatus` (and stringified `status`) to volume state code.
pub const VOLUME_STATE: [(&str, u8); 6] = [
    ("unbind", 0),
    ("bind", 2),
    ("binding", 7),
    ("unbinding", 9),
    ("1", 10),
    ("2", 11),
];

fn lookup(table: &[(&str, u8)], name: &'static str, value: &str) -> CtyunResult<u8> {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, code)| *code)
        .ok_or_else(|| CtyunError::UnmappedState {
            table: name,
            value: value.to_string(),
        })
}

/// Looks up a node status. Unknown statuses are an error, never a default.
pub fn node_state(status: &str) -> CtyunResult<u8> {
    lookup(&NODE_STATE, "node", status)
}

/// Looks up a volume status. Unknown statuses are an error, never a default.
pub fn volume_state(status: &str) -> CtyunResult<u8> {
    lookup(&VOLUME_STATE, "volume", status)
}
