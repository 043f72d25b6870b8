use super::{fields, paths};
use crate::{ApiResponse, CtyunClient, CtyunResult, SignedForm};

impl CtyunClient {
    /// Lists the availability zones. Signed over the keys alone.
    pub async fn list_zones(&self) -> CtyunResult<ApiResponse> {
        self.call(paths::LOAD_ZONE_LIST, SignedForm::new()).await
    }

    /// Lists the purchasable VM types.
    pub async fn list_vm_types(&self) -> CtyunResult<ApiResponse> {
        self.call(paths::LOAD_VM_TYPE_LIST, SignedForm::new()).await
    }

    /// Lists the OS images offered in a zone.
    pub async fn list_os(&self, zone_id: &str) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new().field(fields::ZONE_ID, zone_id);
        self.call(paths::LOAD_OS_LIST, form).await
    }
}
