//! Pricing, purchases, renewals, upgrades, refunds and orders.
//!
//! Most endpoints come in pairs: a `get_*_price` quote and the matching
//! purchase, signed over the same fields in the same order. Purchases create
//! an order that still has to be settled with [`CtyunClient::pay_order`].

use super::{fields, paths};
use crate::core::domain::error::require_non_empty;
use crate::{ApiResponse, CtyunClient, CtyunResult, NewOrderSpec, Page, SignedForm, TrialOrderSpec};

fn new_order_form(spec: &NewOrderSpec) -> SignedForm {
    SignedForm::new()
        .field(fields::CPU, spec.cpu)
        .field(fields::MEMORY, spec.memory)
        .field(fields::DATAHD, spec.datahd)
        .field(fields::OS, spec.os)
        .field(fields::BW, spec.bw)
        .field(fields::ORDER_NUM, spec.order_num)
        .field(fields::PERIOD_TYPE, spec.period_type)
        .field(fields::PERIOD_NUM, spec.period_num)
        .field(fields::ZONE_ID, &spec.zone_id)
}

fn renew_form(period_type: u32, period_num: u32, vm_id: &str) -> CtyunResult<SignedForm> {
    require_non_empty("vm_id", vm_id)?;
    Ok(SignedForm::new()
        .field(fields::PERIOD_TYPE, period_type)
        .field(fields::PERIOD_NUM, period_num)
        .field(fields::ID, vm_id))
}

fn upgrade_form(cpu: u32, memory: u32, vm_id: &str) -> CtyunResult<SignedForm> {
    require_non_empty("vm_id", vm_id)?;
    Ok(SignedForm::new()
        .field(fields::CPU, cpu)
        .field(fields::MEMORY, memory)
        .field(fields::ID, vm_id))
}

fn data_disk_form(datahd: u32, period_num: u32, zone_id: &str) -> SignedForm {
    SignedForm::new()
        .field(fields::DATAHD, datahd)
        .field(fields::PERIOD_NUM, period_num)
        .field(fields::ZONE_ID, zone_id)
}

fn renew_data_disk_form(disk_id: &str, period_num: u32) -> CtyunResult<SignedForm> {
    require_non_empty("disk_id", disk_id)?;
    Ok(SignedForm::new()
        .field(fields::DISK_ID, disk_id)
        .field(fields::PERIOD_NUM, period_num))
}

fn bandwidth_form(bw: u32, zone_id: &str, vm_id: &str) -> CtyunResult<SignedForm> {
    require_non_empty("vm_id", vm_id)?;
    Ok(SignedForm::new()
        .field(fields::BW, bw)
        .field(fields::ZONE_ID, zone_id)
        .field(fields::ID, vm_id))
}

fn order_form(order_id: &str) -> CtyunResult<SignedForm> {
    require_non_empty("order_id", order_id)?;
    Ok(SignedForm::new().field(fields::ORDER_ID, order_id))
}

impl CtyunClient {
    /// Quotes a new instance order.
    pub async fn get_new_order_price(&self, spec: &NewOrderSpec) -> CtyunResult<ApiResponse> {
        self.call(paths::GET_NEW_ORDER_PRICE, new_order_form(spec)).await
    }

    /// Places a new instance order.
    pub async fn buy_cloud(&self, spec: &NewOrderSpec) -> CtyunResult<ApiResponse> {
        self.call(paths::BUY_CLOUD, new_order_form(spec)).await
    }

    pub async fn buy_trial_cloud(&self, spec: &TrialOrderSpec) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::CPU, spec.cpu)
            .field(fields::MEMORY, spec.memory)
            .field(fields::DATAHD, spec.datahd)
            .field(fields::OS, spec.os)
            .field(fields::BW, spec.bw)
            .field(fields::ZONE_ID, &spec.zone_id);
        self.call(paths::BUY_TRIAL_CLOUD, form).await
    }

    pub async fn get_renew_order_price(
        &self,
        period_type: u32,
        period_num: u32,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = renew_form(period_type, period_num, vm_id)?;
        self.call(paths::GET_RENEW_ORDER_PRICE, form).await
    }

    pub async fn renew_cloud(
        &self,
        period_type: u32,
        period_num: u32,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = renew_form(period_type, period_num, vm_id)?;
        self.call(paths::RENEW_CLOUD, form).await
    }

    pub async fn get_upgrade_order_price(
        &self,
        cpu: u32,
        memory: u32,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = upgrade_form(cpu, memory, vm_id)?;
        self.call(paths::GET_UPGRADE_ORDER_PRICE, form).await
    }

    /// Resizes a VM to `cpu` cores and `memory` GB.
    pub async fn upgrade_cloud(
        &self,
        cpu: u32,
        memory: u32,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = upgrade_form(cpu, memory, vm_id)?;
        self.call(paths::UPGRADE_CLOUD, form).await
    }

    pub async fn get_data_disk_price(
        &self,
        datahd: u32,
        period_num: u32,
        zone_id: &str,
    ) -> CtyunResult<ApiResponse> {
        self.call(
            paths::GET_DATADISK_PRICE,
            data_disk_form(datahd, period_num, zone_id),
        )
        .await
    }

    pub async fn buy_data_disk(
        &self,
        datahd: u32,
        period_num: u32,
        zone_id: &str,
    ) -> CtyunResult<ApiResponse> {
        self.call(paths::BUY_DATADISK, data_disk_form(datahd, period_num, zone_id))
            .await
    }

    pub async fn get_renew_data_disk_price(
        &self,
        disk_id: &str,
        period_num: u32,
    ) -> CtyunResult<ApiResponse> {
        let form = renew_data_disk_form(disk_id, period_num)?;
        self.call(paths::GET_RENEW_DATADISK_PRICE, form).await
    }

    pub async fn renew_data_disk(&self, disk_id: &str, period_num: u32) -> CtyunResult<ApiResponse> {
        let form = renew_data_disk_form(disk_id, period_num)?;
        self.call(paths::RENEW_DATADISK, form).await
    }

    pub async fn get_upgrade_bandwidth_price(
        &self,
        bw: u32,
        zone_id: &str,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = bandwidth_form(bw, zone_id, vm_id)?;
        self.call(paths::GET_UPGRADE_BANDWIDTH_PRICE, form).await
    }

    /// Sets the VM's bandwidth to `bw` Mbps.
    pub async fn upgrade_bandwidth(
        &self,
        bw: u32,
        zone_id: &str,
        vm_id: &str,
    ) -> CtyunResult<ApiResponse> {
        let form = bandwidth_form(bw, zone_id, vm_id)?;
        self.call(paths::UPGRADE_BANDWIDTH, form).await
    }

    /// Settles an order. `cash` is sent exactly as given, so format the
    /// amount the way the quote returned it.
    pub async fn pay_order(&self, order_id: &str, cash: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("order_id", order_id)?;
        let form = SignedForm::new()
            .field(fields::ORDER_ID, order_id)
            .field(fields::CASH, cash);
        self.call(paths::PAY_ORDER, form).await
    }

    pub async fn refund_cloud(&self, vm_id: &str, refund_detail: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("vm_id", vm_id)?;
        let form = SignedForm::new()
            .field(fields::ID, vm_id)
            .field(fields::REFUND_DETAIL, refund_detail);
        self.call(paths::REFUND_CLOUD, form).await
    }

    pub async fn refund_disk(&self, disk_id: &str, refund_detail: &str) -> CtyunResult<ApiResponse> {
        require_non_empty("disk_id", disk_id)?;
        let form = SignedForm::new()
            .field(fields::DISK_ID, disk_id)
            .field(fields::REFUND_DETAIL, refund_detail);
        self.call(paths::REFUND_DISK, form).await
    }

    pub async fn get_order_list(&self, page: Page) -> CtyunResult<ApiResponse> {
        let form = SignedForm::new()
            .field(fields::PAGE_NO, page.page_no)
            .field(fields::PAGE_SIZE, page.page_size);
        self.call(paths::GET_ORDER_LIST, form).await
    }

    pub async fn get_order_detail(&self, order_id: &str) -> CtyunResult<ApiResponse> {
        self.call(paths::GET_ORDER_DETAIL, order_form(order_id)?).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> CtyunResult<ApiResponse> {
        self.call(paths::CANCEL_ORDER, order_form(order_id)?).await
    }
}
