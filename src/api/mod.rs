//! Provider operations, one async method per CTyun endpoint.
//!
//! Each method validates its identifiers, builds a [`SignedForm`] in the
//! endpoint's signing order, and returns the decoded [`ApiResponse`] as is.
//!
//! [`SignedForm`]: crate::SignedForm
//! [`ApiResponse`]: crate::ApiResponse

mod catalog;
mod commerce;
mod disk;
mod snapshot;
mod vm;

pub(crate) mod paths {
    pub const LOAD_ZONE_LIST: &str = "/api/loadZoneList";
    pub const LOAD_VM_TYPE_LIST: &str = "/api/loadVMTypeList";
    pub const LOAD_OS_LIST: &str = "/api/loadOSList";

    pub const GET_NEW_ORDER_PRICE: &str = "/api/getNewOrderPrice";
    pub const BUY_CLOUD: &str = "/api/buyCloud";
    pub const BUY_TRIAL_CLOUD: &str = "/api/buyTrialCloud";
    pub const GET_RENEW_ORDER_PRICE: &str = "/api/getRenewOrderPrice";
    pub const RENEW_CLOUD: &str = "/api/renewCloud";
    pub const GET_UPGRADE_ORDER_PRICE: &str = "/api/getUpgradeOrderPrice";
    pub const UPGRADE_CLOUD: &str = "/api/upgradeCloud";
    pub const GET_DATADISK_PRICE: &str = "/api/getDatadiskPrice";
    pub const BUY_DATADISK: &str = "/api/buyDatadisk";
    pub const GET_RENEW_DATADISK_PRICE: &str = "/api/getRenewDatadiskPrice";
    pub const RENEW_DATADISK: &str = "/api/renewDatadisk";
    pub const GET_UPGRADE_BANDWIDTH_PRICE: &str = "/api/getUpgradeBandwidthPrice";
    pub const UPGRADE_BANDWIDTH: &str = "/api/upgradeBandwidth";
    pub const PAY_ORDER: &str = "/api/payOrder";
    pub const REFUND_CLOUD: &str = "/api/refundCloud";
    pub const REFUND_DISK: &str = "/api/refundDisk";
    pub const GET_ORDER_LIST: &str = "/api/getOrderList";
    pub const GET_ORDER_DETAIL: &str = "/api/getOrderDetail";
    pub const CANCEL_ORDER: &str = "/api/cancelOrder";

    pub const GET_VM_LIST: &str = "/api/getVMList";
    pub const GET_VM_LIST_BY_ORDER_ID: &str = "/api/getVMListByOrderId";
    pub const GET_VM_DETAIL_INFO: &str = "/api/getVMDetailInfo";
    pub const GET_VM_PASSWORD: &str = "/api/getVMPassword";
    pub const RESET_VM_PASSWORD: &str = "/api/resetVMPassword";
    pub const GET_VM_STATUS: &str = "/api/getVMStatus";
    pub const START_VM: &str = "/api/startVM";
    pub const STOP_VM: &str = "/api/stopVM";
    pub const RESTART_VM: &str = "/api/restartVM";
    pub const GET_REINSTALL_OS: &str = "/api/getreinstallOS";
    pub const REINSTALL_VM: &str = "/api/reinstallVM";

    pub const GET_DATADISK_LIST: &str = "/api/getDatadiskList";
    pub const GET_DISK_LIST_BY_ORDER_ID: &str = "/api/getDiskListByOrderId";
    pub const GET_DISK_LIST_BY_VM_ID: &str = "/api/getDiskListByVmId";
    pub const RENAME_DATADISK: &str = "/api/renameDatadisk";
    // The provider spells these "band".
    pub const BIND_DATADISK: &str = "/api/bandDatadisk";
    pub const UNBIND_DATADISK: &str = "/api/unbandDatadisk";
    pub const GET_DISK_STATUS: &str = "/api/getDiskStatus";

    pub const SNAPSHOT_LIST: &str = "/api/snapshotList";
    pub const CREATE_SNAPSHOT: &str = "/api/createSnapshot";
    pub const VM_SNAPSHOT_STATUS: &str = "/api/vmSnapshotStatus";
    pub const REMOVE_SNAPSHOT: &str = "/api/removeSnapshot";
    pub const ROLLBACK_SNAPSHOT: &str = "/api/rollbackSnapshot";
    pub const GET_SNAPSHOTS_BY_VM_ID: &str = "/api/getSnapshotsByVmId";
}

/// Wire names of the form fields.
pub(crate) mod fields {
    pub const ID: &str = "id";
    pub const ZONE_ID: &str = "zoneId";
    pub const PAGE_NO: &str = "pageNo";
    pub const PAGE_SIZE: &str = "pageSize";
    pub const ORDER_ID: &str = "orderId";
    pub const DISK_ID: &str = "diskId";
    pub const CPU: &str = "cpu";
    pub const MEMORY: &str = "memory";
    pub const DATAHD: &str = "datahd";
    pub const OS: &str = "os";
    pub const BW: &str = "bw";
    pub const ORDER_NUM: &str = "orderNum";
    pub const PERIOD_TYPE: &str = "periodType";
    pub const PERIOD_NUM: &str = "periodNum";
    pub const CASH: &str = "cash";
    pub const REFUND_DETAIL: &str = "refundDetail";
    pub const NEW_NAME: &str = "newName";
    pub const SNAPSHOT_ID: &str = "snapshotId";
    pub const SNAPSHOT_NAME: &str = "snapshotName";
}
