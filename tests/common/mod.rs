#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use shorturls::application::services::LinkSettings;
use shorturls::domain::clock::ManualClock;
use shorturls::infrastructure::logging::TracingLogSink;
use shorturls::infrastructure::persistence::InMemoryUrlRepository;
use shorturls::routes;
use shorturls::state::AppState;
use shorturls::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://localhost:3000";

/// Fixed start time for every test clock.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

pub fn create_test_state() -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));

    let state = AppState::new(
        Arc::new(InMemoryUrlRepository::new()),
        clock.clone(),
        Arc::new(RandomCodeGenerator::default()),
        LinkSettings {
            base_url: BASE_URL.to_string(),
            default_validity_minutes: 30,
        },
        Arc::new(TracingLogSink::default()),
    );

    (state, clock)
}

pub fn create_test_server() -> (TestServer, Arc<ManualClock>) {
    let (state, clock) = create_test_state();
    let server = TestServer::new(routes::router(state)).unwrap();
    (server, clock)
}

pub async fn create_short_url(server: &TestServer, url: &str, validity: u32, shortcode: &str) {
    server
        .post("/shorturls")
        .json(&serde_json::json!({
            "url": url,
            "validity": validity,
            "shortcode": shortcode,
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
