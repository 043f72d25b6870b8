use crate::{
    CtyunError, NewOrderSpec, Page, TrialOrderSpec,
    tests::{client_for, expect_post, offline_client, ok_body},
};
use serde_json::json;
use wiremock::MockServer;

fn new_order() -> NewOrderSpec {
    NewOrderSpec {
        cpu: 2,
        memory: 4,
        datahd: 100,
        os: 17,
        bw: 5,
        order_num: 1,
        period_type: 3,
        period_num: 12,
        zone_id: "1".to_string(),
    }
}

const NEW_ORDER_FIELDS: [(&str, &str); 9] = [
    ("cpu", "2"),
    ("memory", "4"),
    ("datahd", "100"),
    ("os", "17"),
    ("bw", "5"),
    ("orderNum", "1"),
    ("periodType", "3"),
    ("periodNum", "12"),
    ("zoneId", "1"),
];

#[tokio::test]
async fn test_new_order_quote_and_purchase_share_signing_order() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/getNewOrderPrice",
        &NEW_ORDER_FIELDS,
        json!({"returnCode": 200, "returnObj": {"totalPrice": 1234.5}}),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/buyCloud",
        &NEW_ORDER_FIELDS,
        json!({"returnCode": 200, "returnObj": {"orderId": "ord-9"}}),
    )
    .await;

    let quote = client.get_new_order_price(&new_order()).await.unwrap();
    assert_eq!(quote.return_obj().unwrap()["totalPrice"], json!(1234.5));

    let order = client.buy_cloud(&new_order()).await.unwrap();
    assert_eq!(order.return_obj().unwrap()["orderId"], json!("ord-9"));
}

#[tokio::test]
async fn test_buy_trial_cloud() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/buyTrialCloud",
        &[
            ("cpu", "1"),
            ("memory", "2"),
            ("datahd", "0"),
            ("os", "17"),
            ("bw", "1"),
            ("zoneId", "1"),
        ],
        ok_body(),
    )
    .await;

    let spec = TrialOrderSpec {
        cpu: 1,
        memory: 2,
        datahd: 0,
        os: 17,
        bw: 1,
        zone_id: "1".to_string(),
    };
    client.buy_trial_cloud(&spec).await.unwrap();
}

#[tokio::test]
async fn test_renew_and_upgrade_vm() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let renew = [("periodType", "3"), ("periodNum", "6"), ("id", "vm-42")];
    expect_post(&mock_server, "/api/getRenewOrderPrice", &renew, ok_body()).await;
    expect_post(&mock_server, "/api/renewCloud", &renew, ok_body()).await;

    let upgrade = [("cpu", "4"), ("memory", "8"), ("id", "vm-42")];
    expect_post(&mock_server, "/api/getUpgradeOrderPrice", &upgrade, ok_body()).await;
    expect_post(&mock_server, "/api/upgradeCloud", &upgrade, ok_body()).await;

    let bandwidth = [("bw", "10"), ("zoneId", "1"), ("id", "vm-42")];
    expect_post(
        &mock_server,
        "/api/getUpgradeBandwidthPrice",
        &bandwidth,
        ok_body(),
    )
    .await;
    expect_post(&mock_server, "/api/upgradeBandwidth", &bandwidth, ok_body()).await;

    client.get_renew_order_price(3, 6, "vm-42").await.unwrap();
    client.renew_cloud(3, 6, "vm-42").await.unwrap();
    client.get_upgrade_order_price(4, 8, "vm-42").await.unwrap();
    client.upgrade_cloud(4, 8, "vm-42").await.unwrap();
    client
        .get_upgrade_bandwidth_price(10, "1", "vm-42")
        .await
        .unwrap();
    client.upgrade_bandwidth(10, "1", "vm-42").await.unwrap();
}

#[tokio::test]
async fn test_data_disk_purchase_and_renewal() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let purchase = [("datahd", "200"), ("periodNum", "12"), ("zoneId", "1")];
    expect_post(&mock_server, "/api/getDatadiskPrice", &purchase, ok_body()).await;
    expect_post(&mock_server, "/api/buyDatadisk", &purchase, ok_body()).await;

    let renewal = [("diskId", "disk-7"), ("periodNum", "12")];
    expect_post(
        &mock_server,
        "/api/getRenewDatadiskPrice",
        &renewal,
        ok_body(),
    )
    .await;
    expect_post(&mock_server, "/api/renewDatadisk", &renewal, ok_body()).await;

    client.get_data_disk_price(200, 12, "1").await.unwrap();
    client.buy_data_disk(200, 12, "1").await.unwrap();
    client
        .get_renew_data_disk_price("disk-7", 12)
        .await
        .unwrap();
    client.renew_data_disk("disk-7", 12).await.unwrap();
}

#[tokio::test]
async fn test_orders_payments_and_refunds() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/payOrder",
        &[("orderId", "ord-9"), ("cash", "1234.50")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/refundCloud",
        &[("id", "vm-42"), ("refundDetail", "no longer needed")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/refundDisk",
        &[("diskId", "disk-7"), ("refundDetail", "no longer needed")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/getOrderList",
        &[("pageNo", "1"), ("pageSize", "20")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/getOrderDetail",
        &[("orderId", "ord-9")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/cancelOrder",
        &[("orderId", "ord-9")],
        ok_body(),
    )
    .await;

    // The amount is sent exactly as formatted by the caller.
    client.pay_order("ord-9", "1234.50").await.unwrap();
    client
        .refund_cloud("vm-42", "no longer needed")
        .await
        .unwrap();
    client
        .refund_disk("disk-7", "no longer needed")
        .await
        .unwrap();
    client.get_order_list(Page::new(1, 20)).await.unwrap();
    client.get_order_detail("ord-9").await.unwrap();
    client.cancel_order("ord-9").await.unwrap();
}

#[tokio::test]
async fn test_empty_identifiers_fail_before_sending() {
    let client = offline_client();

    let field_of = |result: Result<_, CtyunError>| match result {
        Err(CtyunError::InvalidParameter { field, .. }) => field,
        other => panic!("expected InvalidParameter, got {:?}", other),
    };

    assert_eq!(field_of(client.get_renew_order_price(3, 6, "").await), "vm_id");
    assert_eq!(field_of(client.renew_cloud(3, 6, "").await), "vm_id");
    assert_eq!(field_of(client.get_upgrade_order_price(4, 8, "").await), "vm_id");
    assert_eq!(field_of(client.upgrade_cloud(4, 8, "").await), "vm_id");
    assert_eq!(
        field_of(client.get_upgrade_bandwidth_price(10, "1", "").await),
        "vm_id"
    );
    assert_eq!(field_of(client.upgrade_bandwidth(10, "1", "").await), "vm_id");
    assert_eq!(field_of(client.get_renew_data_disk_price("", 12).await), "disk_id");
    assert_eq!(field_of(client.renew_data_disk("", 12).await), "disk_id");
    assert_eq!(field_of(client.pay_order("", "1").await), "order_id");
    assert_eq!(field_of(client.refund_cloud("", "x").await), "vm_id");
    assert_eq!(field_of(client.refund_disk("", "x").await), "disk_id");
    assert_eq!(field_of(client.get_order_detail("").await), "order_id");
    assert_eq!(field_of(client.cancel_order("").await), "order_id");
}
