mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _clock) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["log_sink"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_store_size() {
    let (server, _clock) = common::create_test_server();
    common::create_short_url(&server, "https://example.com", 5, "one").await;
    common::create_short_url(&server, "https://example.com", 5, "two").await;

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["store"]["message"], "2 links stored");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (server, _clock) = common::create_test_server();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
    assert!(json["checks"].get("log_sink").is_some());
}
