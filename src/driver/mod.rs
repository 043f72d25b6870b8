//! The provider-agnostic node driver surface and its composition-time registry.

mod ctyun;

pub use ctyun::CtyunNodeDriver;

use crate::{
    ClientConfig, CtyunError, CtyunResult, Node, NodeImage, NodeLocation, NodeSize, Page, StorageVolume,
    ValidationError,
};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The operation set a cloud-management layer expects from a compute provider.
///
/// Lifecycle calls return `true` when the provider accepted the request. They
/// do not wait for the node to reach the target state.
#[async_trait]
pub trait NodeDriver: Send + Sync {
    /// Short provider name, e.g. `"ctyun"`.
    fn name(&self) -> &'static str;

    async fn list_nodes(&self, page: Page) -> CtyunResult<Vec<Node>>;

    async fn list_volumes(&self, zone_id: &str, page: Page) -> CtyunResult<Vec<StorageVolume>>;

    async fn start_node(&self, node: &Node) -> CtyunResult<bool>;

    async fn stop_node(&self, node: &Node) -> CtyunResult<bool>;

    async fn reboot_node(&self, node: &Node) -> CtyunResult<bool>;

    async fn list_sizes(&self) -> CtyunResult<Vec<NodeSize>> {
        Err(CtyunError::Unsupported("list_sizes"))
    }

    async fn list_images(&self) -> CtyunResult<Vec<NodeImage>> {
        Err(CtyunError::Unsupported("list_images"))
    }

    async fn list_locations(&self) -> CtyunResult<Vec<NodeLocation>> {
        Err(CtyunError::Unsupported("list_locations"))
    }
}

/// Providers a [`NodeDriver`] can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Ctyun,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Ctyun => "ctyun",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CtyunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ctyun" => Ok(Provider::Ctyun),
            other => Err(ValidationError::Field {
                field: "provider".to_string(),
                message: format!("Unknown provider '{}'", other),
            }
            .into()),
        }
    }
}

/// Connection settings shared by every provider.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Access key.
    pub key: String,
    /// Secret key.
    pub secret: String,
    /// Endpoint host; the provider default when `None`.
    pub host: Option<String>,
    pub port: Option<u16>,
    /// HTTPS when `true`.
    pub secure: bool,
    /// Accept certificates that fail validation. Turn off for endpoints with a trusted certificate.
    pub accept_invalid_certs: bool,
    /// Timeout and rate limit for every call.
    pub client_config: ClientConfig,
}

impl DriverConfig {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            host: None,
            port: None,
            secure: true,
            accept_invalid_certs: true,
            client_config: ClientConfig::default(),
        }
    }
}

/// Factory for creating node drivers
pub struct DriverFactory;

impl DriverFactory {
    /// Create a driver for `provider`
    pub fn create(provider: Provider, config: DriverConfig) -> CtyunResult<Arc<dyn NodeDriver>> {
        match provider {
            Provider::Ctyun => Ok(Arc::new(CtyunNodeDriver::from_config(config)?)),
        }
    }
}
