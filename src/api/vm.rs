use super::{fields, paths};
use crate::core::domain::error::require_non_empty;
use crate::{ApiResponse, CtyunClient, CtyunResult, Page, SignedForm};

impl CtyunClient {
    /// Lists the account's VMs, one page at a time.
    ///
    /// The records are under `returnObj.VMList`.
    pub async fn get_vm_list(&self, page: Page) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::PAGE_NO, page.page_no)
            .field(fields::PAGE_SIZE, page.page_size);
        self.call(paths::GET_VM_LIST, form).await
    }

    /// Lists the VMs created by an order.
    pub async fn get_vm_list_by_order_id(&self, order_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("order_id", order_id)?;
        let form = SignedForm::new().field(fields::ORDER_ID, order_id);
        self.call(paths::GET_VM_LIST_BY_ORDER_ID, form).await
    }

    pub async fn get_vm_detail_info(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::GET_VM_DETAIL_INFO, vm_id).await
    }

    pub async fn get_vm_password(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::GET_VM_PASSWORD, vm_id).await
    }

    pub async fn reset_vm_password(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::RESET_VM_PASSWORD, vm_id).await
    }

    pub async fn get_vm_status(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::GET_VM_STATUS, vm_id).await
    }

    pub async fn start_vm(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::START_VM, vm_id).await
    }

    pub async fn stop_vm(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::STOP_VM, vm_id).await
    }

    pub async fn restart_vm(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::RESTART_VM, vm_id).await
    }

    /// Lists the OS images a VM can be reinstalled with.
    pub async fn get_reinstall_os(&self, vm_id: &str) -> CtyunResult<ApiResponse> {
        self.vm_action(paths::GET_REINSTALL_OS, vm_id).await
    }

    /// Reinstalls a VM with the image `os`. The system disk is wiped.
    pub async fn reinstall_vm(&self, vm_id: &str, os: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new()
            .field(fields::ID, vm_id)
            .field(fields::OS, os);
        self.call(paths::REINSTALL_VM, form).await
    }

    /// Posts `{id}` to a single-VM endpoint.
    async fn vm_action(&self, path: &str, vm_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        self.call(path, SignedForm::new().field(fields::ID, vm_id)).await
    }
}
