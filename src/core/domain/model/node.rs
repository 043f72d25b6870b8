//! Provider-agnostic compute entities handed to the cloud-management layer.

use serde::{Deserialize, Serialize};

/// A normalized compute instance.
///
/// Built by the resource mapper from a raw VM record and owned by the caller
/// afterwards; the driver never mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    /// Lifecycle state code from the node-state table.
    pub state: u8,
    /// Zero or one public address.
    pub public_ips: Vec<String>,
    /// Zero or one private address.
    pub private_ips: Vec<String>,
    pub extra: NodeExtra,
}

/// Provider metadata carried on a [`Node`] without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NodeExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

/// A purchasable instance shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeSize {
    pub id: String,
    pub name: String,
    /// Virtual CPU count.
    pub cpu: u32,
    /// Memory in MB.
    pub ram: u32,
    /// System disk in GB.
    pub disk: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A caller-driven page cursor. The driver keeps no pagination state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page_no: u32,
    pub page_size: u32,
}

impl Page {
    /// Default page for node listings.
    pub const NODES: Page = Page {
        page_no: 1,
        page_size: 2,
    };

    /// Default page for volume listings.
    pub const VOLUMES: Page = Page {
        page_no: 1,
        page_size: 10,
    };

    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self { page_no, page_size }
    }

    /// The page after this one, same size.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page_no: self.page_no.saturating_add(1),
            ..self
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::NODES
    }
}

/// An installable OS image.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeImage {
    pub id: String,
    pub name: String,
}

/// A region or zone nodes can be placed in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeLocation {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
