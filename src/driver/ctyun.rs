use super::{DriverConfig, NodeDriver};
use crate::core::domain::error::require_non_empty;
use crate::{
    ApiResponse, CtyunClient, CtyunClientBuilder, CtyunResult, DiskRecord, Node, Page, StorageVolume, VmRecord,
    to_nodes, to_volumes,
};
use async_trait::async_trait;
use tracing::{debug, info};

const VM_LIST_KEY: &str = "VMList";
const DISK_LIST_KEY: &str = "DiskList";

/// [`NodeDriver`] for CTyun, built on a [`CtyunClient`].
#[derive(Debug, Clone)]
pub struct CtyunNodeDriver {
    client: CtyunClient,
}

impl CtyunNodeDriver {
    pub fn new(client: CtyunClient) -> Self {
        Self { client }
    }

    /// Builds the underlying client from generic driver settings.
    pub fn from_config(config: DriverConfig) -> CtyunResult<Self> {
        Ok(Self::new(builder_from_config(config)?.build()?))
    }

    /// The client behind this driver, for operations outside the generic surface.
    pub fn client(&self) -> &CtyunClient {
        &self.client
    }

    fn accepted(action: &str, node: &Node, response: &ApiResponse) -> bool {
        let accepted = response.is_success();
        info!(
            action,
            node_id = %node.id,
            return_code = ?response.return_code(),
            accepted,
            "node lifecycle request"
        );
        accepted
    }
}

/// Translates generic driver settings into a client builder.
pub(crate) fn builder_from_config(config: DriverConfig) -> CtyunResult<CtyunClientBuilder> {
    let mut builder = CtyunClient::builder()
        .credentials(config.key, config.secret)?
        .secure(config.secure)
        .accept_invalid_certs(config.accept_invalid_certs)
        .timeout(config.client_config.timeout)
        .rate_limit(config.client_config.rate_limit);
    if let Some(host) = config.host {
        builder = builder.host(host)?;
    }
    if let Some(port) = config.port {
        builder = builder.port(port)?;
    }
    Ok(builder)
}

#[async_trait]
impl NodeDriver for CtyunNodeDriver {
    fn name(&self) -> &'static str {
        "ctyun"
    }

    async fn list_nodes(&self, page: Page) -> CtyunResult<Vec<Node>> {
        let response = self.client.get_vm_list(page).await?;
        let records: Vec<VmRecord> = response.list_payload(VM_LIST_KEY)?;
        debug!(count = records.len(), page_no = page.page_no, "listed VMs");
        to_nodes(&records)
    }

    async fn list_volumes(&self, zone_id: &str, page: Page) -> CtyunResult<Vec<StorageVolume>> {
        let response = self.client.get_data_disk_list(zone_id, page).await?;
        let records: Vec<DiskRecord> = response.list_payload(DISK_LIST_KEY)?;
        debug!(count = records.len(), zone_id, page_no = page.page_no, "listed data disks");
        to_volumes(&records)
    }

    async fn start_node(&self, node: &Node) -> CtyunResult<bool> {
        require_non_empty("node.id", &node.id)?;
        let response = self.client.start_vm(&node.id).await?;
        Ok(Self::accepted("start", node, &response))
    }

    async fn stop_node(&self, node: &Node) -> CtyunResult<bool> {
        require_non_empty("node.id", &node.id)?;
        let response = self.client.stop_vm(&node.id).await?;
        Ok(Self::accepted("stop", node, &response))
    }

    async fn reboot_node(&self, node: &Node) -> CtyunResult<bool> {
        require_non_empty("node.id", &node.id)?;
        let response = self.client.restart_vm(&node.id).await?;
        Ok(Self::accepted("reboot", node, &response))
    }
}
