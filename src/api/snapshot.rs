use super::{fields, paths};
use crate::core::domain::error::require_non_empty;
use crate::{ApiResponse, CtyunClient, CtyunResult, Page, SignedForm};

// Snapshot endpoints do not share a field order: zoneId comes first in the
// listing and last everywhere else.
impl CtyunClient {
    pub async fn get_snapshot_list(&self, zone_id: &str, page: Page) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::ZONE_ID, zone_id)
            .field(fields::PAGE_NO, page.page_no)
            .field(fields::PAGE_SIZE, page.page_size);
        self.call(paths::SNAPSHOT_LIST, form).await
    }

    pub async fn create_snapshot(
        &self,
        vm_id: &str,
        snapshot_name: &str,
    ) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new()
            .field(fields::ID, vm_id)
            .field(fields::SNAPSHOT_NAME, snapshot_name);
        self.call(paths::CREATE_SNAPSHOT, form).await
    }

    pub async fn get_vm_snapshot_status(
        &self,
        snapshot_id: &str,
        zone_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::SNAPSHOT_ID, snapshot_id)
            .field(fields::ZONE_ID, zone_id);
        self.call(paths::VM_SNAPSHOT_STATUS, form).await
    }

    pub async fn remove_snapshot(&self, vm_id: &str, snapshot_id: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new()
            .field(fields::ID, vm_id)
            .field(fields::SNAPSHOT_ID, snapshot_id);
        self.call(paths::REMOVE_SNAPSHOT, form).await
    }

    /// Rolls the owning VM back to `snapshot_id`.
    pub async fn rollback_snapshot(
        &self,
        zone_id: &str,
        snapshot_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::SNAPSHOT_ID, snapshot_id)
            .field(fields::ZONE_ID, zone_id);
        self.call(paths::ROLLBACK_SNAPSHOT, form).await
    }

    pub async fn get_snapshots_by_vm_id(
        &self,
        vm_id: &str,
        zone_id: &str,
    ) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        require_non_empty("zone_id", zone_id)?;
        let form = SignedForm::new()
            .field(fields::ID, vm_id)
            .field(fields::ZONE_ID, zone_id);
        self.call(paths::GET_SNAPSHOTS_BY_VM_ID, form).await
    }
}
