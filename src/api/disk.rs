use super::{fields, paths};
use crate::core::domain::error::require_non_empty;
use crate::{ApiResponse, CtyunClient, CtyunResult, Page, SignedForm};

impl CtyunClient {
    /// Lists data disks in a zone. The records are under `returnObj.DiskList`.
    pub async fn get_data_disk_list(&self, zone_id: &str, page: Page) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::PAGE_NO, page.page_no)
            .field(fields::PAGE_SIZE, page.page_size)
            .field(fields::ZONE_ID, zone_id);
        self.call(paths::GET_DATADISK_LIST, form).await
    }

    pub async fn get_disk_list_by_order_id(&self, order_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("order_id", order_id)?;
        let form = SignedForm::new().field(fields::ORDER_ID, order_id);
        self.call(paths::GET_DISK_LIST_BY_ORDER_ID, form).await
    }

    /// Lists the disks attached to a VM, system disk included.
    pub async fn get_disk_list_by_vm_id(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new().field(fields::ID, vm_id);
        self.call(paths::GET_DISK_LIST_BY_VM_ID, form).await
    }

    pub async fn rename_data_disk(
        &self,
        disk_id: &str,
        new_name: &str,
        zone_id: &str,
    ) -> CtyunResult<ApiResponse> {
        require_non_empty("disk_id", disk_id)?;
        let form = SignedForm::new()
            .field(fields::DISK_ID, disk_id)
            .field(fields::NEW_NAME, new_name)
            .field(fields::ZONE_ID, zone_id);
        self.call(paths::RENAME_DATADISK, form).await
    }

    /// Attaches a data disk to a VM.
    pub async fn bind_data_disk(&self, disk_id: &str, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.disk_vm_action(paths::BIND_DATADISK, disk_id, vm_id).await
    }

    /// Detaches a data disk from a VM.
    pub async fn unbind_data_disk(&self, disk_id: &str, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.disk_vm_action(paths::UNBIND_DATADISK, disk_id, vm_id).await
    }

    pub async fn get_disk_status(&self, disk_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("disk_id", disk_id)?;
        let form = SignedForm::new().field(fields::DISK_ID, disk_id);
        self.call(paths::GET_DISK_STATUS, form).await
    }

    async fn disk_vm_action(
        &self,
        path: &str,
        disk_id: &str,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        require_non_empty("disk_id", disk_id)?;
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new()
            .field(fields::DISK_ID, disk_id)
            .field(fields::ID, vm_id);
        self.call(path, form).await
    }
}
