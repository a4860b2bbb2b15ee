//! HttpSelectionBackend 集成测试
//!
//! 默认测试使用本地预设响应服务。连接真实后端：
//! ```bash
//! IP_SELECTOR_BASE_URL=http://127.0.0.1:8080 \
//!     cargo test -p ip-selector-client --test http_backend_test -- --ignored --nocapture
//! ```

mod common;

use common::{CannedServer, ok_body};
use ip_selector_client::{ClientConfig, ClientError, HttpSelectionBackend, JobStatus, SelectionBackend};
use serde_json::json;

// ============ 提交任务 ============

#[tokio::test]
async fn test_submit_sends_ranges_in_order_including_blanks() {
    let server = CannedServer::start(vec![(200, r#"{"code":0}"#.to_string())]).await;
    let backend = server.backend();

    let ranges = vec![
        "173.245.48.0/20".to_string(),
        String::new(),
        "104.16.0.0/13".to_string(),
    ];
    require_ok!(backend.submit_selection(&ranges).await, "submit_selection 调用失败");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/ip/select");
    assert_eq!(
        requests[0].json(),
        json!(["173.245.48.0/20", "", "104.16.0.0/13"])
    );
}

#[tokio::test]
async fn test_submit_rejected_by_backend() {
    let server = CannedServer::start(vec![(
        200,
        r#"{"code":500,"message":"execute command failed"}"#.to_string(),
    )])
    .await;

    let err = server
        .backend()
        .submit_selection(&["1.0.0.0/24".to_string()])
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ClientError::Api { code: 500, message: Some(m) } if m == "execute command failed"),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.user_message(), "execute command failed");
}

// ============ 状态轮询 ============

#[tokio::test]
async fn test_status_values() {
    let server = CannedServer::start(vec![
        (200, ok_body(&json!("Processing"))),
        (200, ok_body(&json!("Success"))),
        (200, ok_body(&json!("Pending"))),
    ])
    .await;
    let backend = server.backend();

    assert_eq!(backend.selection_status().await.unwrap(), JobStatus::Processing);
    assert_eq!(backend.selection_status().await.unwrap(), JobStatus::Success);
    assert_eq!(backend.selection_status().await.unwrap(), JobStatus::Pending);

    let requests = server.requests();
    assert!(requests.iter().all(|r| r.method == "GET"));
    assert!(requests.iter().all(|r| r.path == "/api/ip/select/status"));
}

#[tokio::test]
async fn test_status_failure_envelope_is_an_error() {
    let server = CannedServer::start(vec![(
        200,
        r#"{"code":500,"message":"CloudflareST exited with 1"}"#.to_string(),
    )])
    .await;

    let err = server.backend().selection_status().await.unwrap_err();
    assert!(err.is_expected(), "backend rejection should be expected: {err:?}");
}

#[tokio::test]
async fn test_status_without_data_is_a_parse_error() {
    let server = CannedServer::start(vec![(200, r#"{"code":0}"#.to_string())]).await;

    let err = server.backend().selection_status().await.unwrap_err();
    assert!(matches!(err, ClientError::ParseError { .. }), "unexpected error: {err:?}");
}

// ============ 候选列表 ============

#[tokio::test]
async fn test_list_selected_parses_rows() {
    let server = CannedServer::start(vec![(
        200,
        ok_body(&json!([
            ["104.16.1.1", "4", "4", "0.00", "151.20", "12.3"],
            ["104.16.1.2", "4", "4", "0.00", "160.02", "10.1"]
        ])),
    )])
    .await;

    let records = require_ok!(server.backend().list_selected().await);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field(0), Some("104.16.1.1"));
    assert_eq!(records[1].fields().len(), 6);

    let requests = server.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/ip/select");
}

#[tokio::test]
async fn test_list_selected_missing_data_is_empty() {
    let server = CannedServer::start(vec![(200, r#"{"code":0}"#.to_string())]).await;

    let records = require_ok!(server.backend().list_selected().await);
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_non_2xx_status_is_reported() {
    let server = CannedServer::start(vec![(502, "bad gateway".to_string())]).await;

    let err = server.backend().list_selected().await.unwrap_err();
    assert!(
        matches!(&err, ClientError::HttpStatus { status: 502, .. }),
        "unexpected error: {err:?}"
    );
    assert!(!err.is_expected());
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = CannedServer::start(vec![(200, "<html>oops</html>".to_string())]).await;

    let err = server.backend().list_selected().await.unwrap_err();
    assert!(matches!(err, ClientError::ParseError { .. }), "unexpected error: {err:?}");
}

// ============ DNS 同步 ============

#[tokio::test]
async fn test_sync_dns_body() {
    let server = CannedServer::start(vec![(200, r#"{"code":0}"#.to_string())]).await;

    require_ok!(server.backend().sync_dns("104.16.1.1").await, "sync_dns 调用失败");

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/dns/sync");
    assert_eq!(requests[0].json(), json!({ "ip": "104.16.1.1" }));
}

#[tokio::test]
async fn test_base_url_prefix_is_respected() {
    let server =
        CannedServer::start_with_prefix(vec![(200, r#"{"code":0}"#.to_string())], "/panel").await;

    require_ok!(server.backend().health_check().await);

    let requests = server.requests();
    assert_eq!(requests[0].path, "/panel/api/server/health_check");
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    // 绑定后立即释放端口，确保无人监听
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpSelectionBackend::new(&ClientConfig {
        base_url: format!("http://{addr}"),
        ..ClientConfig::default()
    })
    .unwrap();

    let err = backend.health_check().await.unwrap_err();
    assert!(
        matches!(err, ClientError::NetworkError { .. } | ClientError::Timeout { .. }),
        "unexpected error: {err:?}"
    );
}

// ============ 真实后端 ============

#[tokio::test]
#[ignore = "integration test: requires IP_SELECTOR_BASE_URL pointing at a running backend"]
async fn test_live_health_check() {
    skip_if_no_backend!("IP_SELECTOR_BASE_URL");

    let base_url = std::env::var("IP_SELECTOR_BASE_URL").unwrap_or_default();
    let backend = require_ok!(HttpSelectionBackend::new(&ClientConfig {
        base_url,
        ..ClientConfig::default()
    }));

    require_ok!(backend.health_check().await, "health_check 调用失败");
    let status = require_ok!(backend.selection_status().await, "selection_status 调用失败");
    println!("✓ health_check 测试通过，当前任务状态: {status}");
}
