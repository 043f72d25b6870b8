use crate::{
    CtyunClient, CtyunError, Page,
    tests::{client_for, expect_post, offline_client, ok_body},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

#[tokio::test]
async fn test_get_data_disk_list_signs_page_before_zone() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/getDatadiskList",
        &[("pageNo", "1"), ("pageSize", "10"), ("zoneId", "1")],
        json!({"returnCode": 200, "returnObj": {"DiskList": []}}),
    )
    .await;

    let response = client.get_data_disk_list("1", Page::VOLUMES).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_get_data_disk_list_known_signature() {
    let mock_server = MockServer::start().await;
    let client = CtyunClient::builder()
        .credentials("ak", "sk")
        .unwrap()
        .base_url(mock_server.uri())
        .unwrap()
        .build()
        .unwrap();

    // md5("ak_2_10_1_sk")
    Mock::given(method("POST"))
        .and(path("/api/getDatadiskList"))
        .and(body_string_contains("vKey=0c1cd83909154dc1b3cc832e0bd77d10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .get_data_disk_list("1", Page::new(2, 10))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_disk_lookups() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/getDiskListByOrderId",
        &[("orderId", "ord-9")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/getDiskListByVmId",
        &[("id", "vm-42")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/getDiskStatus",
        &[("diskId", "disk-7")],
        ok_body(),
    )
    .await;

    client.get_disk_list_by_order_id("ord-9").await.unwrap();
    client.get_disk_list_by_vm_id("vm-42").await.unwrap();
    client.get_disk_status("disk-7").await.unwrap();
}

#[tokio::test]
async fn test_rename_data_disk() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/renameDatadisk",
        &[("diskId", "disk-7"), ("newName", "logs volume"), ("zoneId", "1")],
        ok_body(),
    )
    .await;

    assert!(
        client
            .rename_data_disk("disk-7", "logs volume", "1")
            .await
            .unwrap()
            .is_success()
    );
}

#[tokio::test]
async fn test_bind_and_unbind_use_provider_paths() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/bandDatadisk",
        &[("diskId", "disk-7"), ("id", "vm-42")],
        ok_body(),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/unbandDatadisk",
        &[("diskId", "disk-7"), ("id", "vm-42")],
        ok_body(),
    )
    .await;

    assert!(client.bind_data_disk("disk-7", "vm-42").await.unwrap().is_success());
    assert!(client.unbind_data_disk("disk-7", "vm-42").await.unwrap().is_success());
}

#[tokio::test]
async fn test_empty_identifiers_fail_before_sending() {
    let client = offline_client();

    let is_field = |result: Result<_, CtyunError>, expected: &str| {
        matches!(result, Err(CtyunError::InvalidParameter { ref field, .. }) if field == expected)
    };

    assert!(is_field(client.get_disk_list_by_order_id("").await, "order_id"));
    assert!(is_field(client.get_disk_list_by_vm_id("").await, "vm_id"));
    assert!(is_field(client.rename_data_disk("", "x", "1").await, "disk_id"));
    assert!(is_field(client.bind_data_disk("", "vm-42").await, "disk_id"));
    assert!(is_field(client.bind_data_disk("disk-7", "").await, "vm_id"));
    assert!(is_field(client.unbind_data_disk("disk-7", " ").await, "vm_id"));
    assert!(is_field(client.get_disk_status("").await, "disk_id"));
}
