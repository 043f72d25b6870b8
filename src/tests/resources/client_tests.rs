use crate::{
    CtyunClient, CtyunClientBuilder, CtyunError, Page, RateLimitConfig, ValidationError,
    tests::{ACCESS_KEY, SECRET_KEY, client_for, expect_post, ok_body},
};
use std::collections::HashMap;
use std::time::Duration;
use wiremock::MockServer;

#[test]
fn test_builder_requires_credentials() {
    let result = CtyunClient::builder().build();
    assert!(matches!(result, Err(CtyunError::Validation(_))));
}

#[test]
fn test_builder_rejects_invalid_settings() {
    assert!(CtyunClient::builder().credentials("", SECRET_KEY).is_err());
    assert!(CtyunClient::builder().credentials(ACCESS_KEY, "").is_err());
    assert!(CtyunClient::builder().credentials("A K", SECRET_KEY).is_err());
    assert!(CtyunClient::builder().host("").is_err());
    assert!(CtyunClient::builder().host("-bad-.example").is_err());
    assert!(CtyunClient::builder().port(0).is_err());
    assert!(CtyunClient::builder().base_url("ftp://example.com").is_err());
    assert!(CtyunClient::builder().base_url("not a url").is_err());
}

#[test]
fn test_builder_rejects_zero_timeout() {
    let result = CtyunClient::builder()
        .credentials(ACCESS_KEY, SECRET_KEY)
        .unwrap()
        .timeout(Some(Duration::ZERO))
        .build();
    assert!(matches!(result, Err(CtyunError::Validation(_))));
}

#[test]
fn test_builder_defaults_build() {
    let client = CtyunClient::builder()
        .credentials(ACCESS_KEY, SECRET_KEY)
        .unwrap()
        .host("api.ctyun.example")
        .unwrap()
        .port(8443)
        .unwrap()
        .accept_invalid_certs(false)
        .build()
        .unwrap();
    assert_eq!(client.access_key().as_str(), ACCESS_KEY);
}

#[test]
fn test_debug_output_hides_secret() {
    let client = CtyunClient::builder()
        .credentials(ACCESS_KEY, "super-secret")
        .unwrap()
        .build()
        .unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains(ACCESS_KEY));
    assert!(!debug.contains("super-secret"));
}

#[tokio::test]
async fn test_base_url_prefix_is_kept() {
    let mock_server = MockServer::start().await;
    let client = CtyunClient::builder()
        .credentials(ACCESS_KEY, SECRET_KEY)
        .unwrap()
        .base_url(format!("{}/gateway/", mock_server.uri()))
        .unwrap()
        .build()
        .unwrap();

    expect_post(
        &mock_server,
        "/gateway/api/getVMList",
        &[("pageNo", "1"), ("pageSize", "2")],
        ok_body(),
    )
    .await;

    client.get_vm_list(Page::default()).await.unwrap();
}

#[tokio::test]
async fn test_rate_limited_client_still_delivers() {
    let mock_server = MockServer::start().await;
    let client = CtyunClient::builder()
        .credentials(ACCESS_KEY, SECRET_KEY)
        .unwrap()
        .base_url(mock_server.uri())
        .unwrap()
        .rate_limit(Some(RateLimitConfig {
            requests_per_second: 10,
            burst_size: 1,
        }))
        .build()
        .unwrap();

    expect_post(&mock_server, "/api/getVMStatus", &[("id", "vm-1")], ok_body()).await;
    client.get_vm_status("vm-1").await.unwrap();
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    for id in ["vm-1", "vm-2"] {
        expect_post(&mock_server, "/api/getVMStatus", &[("id", id)], ok_body()).await;
    }

    let handles: Vec<_> = ["vm-1", "vm-2"]
        .into_iter()
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { client.get_vm_status(id).await })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_success());
    }
}

fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_env_requires_access_key() {
    let result = CtyunClientBuilder::from_lookup(env_of(&[("CTYUN_SECRET_KEY", SECRET_KEY)]));
    assert!(matches!(
        result,
        Err(CtyunError::Validation(ValidationError::Field { ref field, .. })) if field == "CTYUN_ACCESS_KEY"
    ));
}

#[test]
fn test_env_rejects_non_numeric_port() {
    let result = CtyunClientBuilder::from_lookup(env_of(&[
        ("CTYUN_ACCESS_KEY", ACCESS_KEY),
        ("CTYUN_SECRET_KEY", SECRET_KEY),
        ("CTYUN_PORT", "abc"),
    ]));
    assert!(matches!(
        result,
        Err(CtyunError::Validation(ValidationError::Format(_)))
    ));
}

#[test]
fn test_env_reads_optional_settings() {
    let builder = CtyunClientBuilder::from_lookup(env_of(&[
        ("CTYUN_ACCESS_KEY", ACCESS_KEY),
        ("CTYUN_SECRET_KEY", SECRET_KEY),
        ("CTYUN_HOST", "api.ctyun.example"),
        ("CTYUN_PORT", "8443"),
        ("CTYUN_BASE_URL", "http://127.0.0.1:9000/ctyun"),
    ]))
    .unwrap();
    assert_eq!(builder.host, "api.ctyun.example");
    assert_eq!(builder.port, Some(8443));
    assert_eq!(
        builder.base_url.as_deref(),
        Some("http://127.0.0.1:9000/ctyun")
    );
    assert_eq!(builder.access_key.as_deref(), Some(ACCESS_KEY));
    assert!(builder.build().is_ok());
}

#[test]
fn test_env_defaults_without_optional_settings() {
    let builder = CtyunClientBuilder::from_lookup(env_of(&[
        ("CTYUN_ACCESS_KEY", ACCESS_KEY),
        ("CTYUN_SECRET_KEY", SECRET_KEY),
    ]))
    .unwrap();
    assert_eq!(builder.port, None);
    assert!(builder.base_url.is_none());
}
