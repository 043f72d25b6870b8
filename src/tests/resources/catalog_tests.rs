use crate::tests::{ACCESS_KEY, client_for, expect_post};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, method, path},
};

#[tokio::test]
async fn test_list_zones_is_signed_over_keys_only() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    // md5("AK1_SK1")
    Mock::given(method("POST"))
        .and(path("/api/loadZoneList"))
        .and(body_string(format!(
            "accessKey={}&vKey=d8840209a82eecda96ed11bb8cd432b3",
            ACCESS_KEY
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": 200,
            "returnObj": [{"zoneId": 1, "zoneName": "Guizhou"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.list_zones().await.unwrap();
    assert_eq!(
        response.return_obj().unwrap()[0]["zoneName"],
        json!("Guizhou")
    );
}

#[tokio::test]
async fn test_list_vm_types_and_os() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    expect_post(
        &mock_server,
        "/api/loadVMTypeList",
        &[],
        json!({"returnCode": 200, "returnObj": []}),
    )
    .await;
    expect_post(
        &mock_server,
        "/api/loadOSList",
        &[("zoneId", "1")],
        json!({"returnCode": 200, "returnObj": [{"id": 17, "name": "CentOS 7.6"}]}),
    )
    .await;

    assert!(client.list_vm_types().await.unwrap().is_success());
    assert!(client.list_os("1").await.unwrap().is_success());
}
