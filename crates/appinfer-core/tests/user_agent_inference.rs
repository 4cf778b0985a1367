//! Integration tests: User-Agent inference against a local manifest server.

mod common;

use appinfer_core::http::GetOptions;
use appinfer_core::user_agent::VersionResolver;
use appinfer_core::{
    build_user_agent, infer_user_agent, InferError, Platform, UserAgentInferrer,
    DEFAULT_BROWSER_VERSION,
};
use common::http_server::{self, Canned};
use std::time::{Duration, Instant};

const MANIFEST: &str = r#"[
    {"version": "9.0.0", "chrome": "83.0.4102.3", "node": "12.14.1"},
    {"version": "8.2.0", "chrome": "80.0.3987.141", "node": "12.13.0"}
]"#;

#[tokio::test]
async fn listed_version_uses_manifest_chrome() {
    let server = http_server::start(Canned::json(MANIFEST));
    for platform in Platform::ALL {
        let ua = infer_user_agent("8.2.0", platform, Some(&server.url)).await;
        assert_eq!(ua, build_user_agent("80.0.3987.141", platform));
    }
}

#[tokio::test]
async fn missing_version_falls_back_to_default() {
    let server = http_server::start(Canned::json(MANIFEST));
    let ua = infer_user_agent("1.0.0", Platform::Linux, Some(&server.url)).await;
    assert_eq!(ua, build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Linux));
}

#[tokio::test]
async fn bad_status_falls_back_to_default() {
    let server = http_server::start(Canned::status(500));
    let ua = infer_user_agent("8.2.0", Platform::Win32, Some(&server.url)).await;
    assert_eq!(ua, build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Win32));
}

#[tokio::test]
async fn malformed_manifest_falls_back_to_default() {
    let server = http_server::start(Canned::json(r#"{"releases": []}"#));
    let ua = infer_user_agent("8.2.0", Platform::Darwin, Some(&server.url)).await;
    assert_eq!(ua, build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Darwin));
}

#[tokio::test]
async fn unreachable_manifest_falls_back_to_default() {
    let url = http_server::unreachable_url();
    let ua = infer_user_agent("8.2.0", Platform::Mas, Some(&url)).await;
    assert_eq!(ua, build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Mas));
}

#[tokio::test]
async fn resolver_reports_status_code() {
    let server = http_server::start(Canned::status(503));
    let err = VersionResolver::new(server.url.clone())
        .resolve_browser_version("8.2.0")
        .await
        .unwrap_err();
    match err {
        InferError::RemoteFetch { url, status } => {
            assert_eq!(url, server.url);
            assert_eq!(status, 503);
        }
        other => panic!("expected RemoteFetch, got {other:?}"),
    }
}

#[tokio::test]
async fn resolver_reports_missing_version() {
    let server = http_server::start(Canned::json(MANIFEST));
    let err = VersionResolver::new(server.url.clone())
        .resolve_browser_version("10.0.0")
        .await
        .unwrap_err();
    assert!(matches!(err, InferError::VersionNotFound(v) if v == "10.0.0"));
}

#[tokio::test]
async fn every_call_refetches_and_is_idempotent() {
    let server = http_server::start(Canned::json(MANIFEST));
    let inferrer = UserAgentInferrer::new(
        VersionResolver::new(server.url.clone()).timeout(Duration::from_secs(2)),
    );
    let first = inferrer.infer("9.0.0", Platform::Linux).await;
    let second = inferrer.infer("9.0.0", Platform::Linux).await;
    assert_eq!(first, second);
    assert!(first.contains("Chrome/83.0.4102.3 "));
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn silent_manifest_times_out_to_default() {
    let server = http_server::start_silent();
    let inferrer = UserAgentInferrer::new(
        VersionResolver::new(server.url.clone()).timeout(Duration::from_secs(1)),
    );

    let started = Instant::now();
    let ua = inferrer.infer("8.2.0", Platform::Linux).await;
    let elapsed = started.elapsed();

    assert_eq!(ua, build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Linux));
    assert!(
        elapsed < Duration::from_secs(4),
        "manifest fetch not bounded by its timeout: {elapsed:?}"
    );
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn oversized_body_aborts_transfer() {
    let server = http_server::start(Canned::json(MANIFEST));
    let err = appinfer_core::http::get(
        &server.url,
        &GetOptions::with_timeout(Duration::from_secs(2)).max_body_bytes(16),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, InferError::Transport(_)), "got {err:?}");

    let ok = appinfer_core::http::get(&server.url, &GetOptions::with_timeout(Duration::from_secs(2)))
        .await
        .unwrap();
    assert_eq!(ok.body, MANIFEST.as_bytes());
}
