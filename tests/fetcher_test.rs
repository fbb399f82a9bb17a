//! Tests for the HTTP hazard map fetcher against a local server

mod common;

use common::start_server;
use rdm::downloader::{HttpFetcher, ImageFetcher};
use rdm::errors::AppError;
use std::fs;
use tempfile::TempDir;
use url::Url;

fn fetcher() -> HttpFetcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpFetcher::with_client(client)
}

#[tokio::test]
async fn fetch_writes_body_to_destination() {
    let body = b"\xff\xd8\xff\xe0 hazard map".to_vec();
    let (base, requests) = start_server("200 OK", body.clone());
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("250715.jpg");

    let url = Url::parse(&base).unwrap().join("250715.jpg").unwrap();
    fetcher().fetch(&url, &dest).await.unwrap();

    assert_eq!(fs::read(&dest).unwrap(), body);
    assert_eq!(requests.lock().unwrap().as_slice(), ["/250715.jpg"]);
}

#[tokio::test]
async fn not_found_is_a_network_error_with_status() {
    let (base, _) = start_server("404 Not Found", b"missing".to_vec());
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("250715.jpg");

    let url = Url::parse(&base).unwrap().join("250715.jpg").unwrap();
    let err = fetcher().fetch(&url, &dest).await.unwrap_err();

    match err {
        AppError::NetworkError(msg) => assert!(msg.contains("HTTP 404")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dest.exists());
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let tmp = TempDir::new().unwrap();

    let url = Url::parse(&format!("http://127.0.0.1:{port}/250715.jpg")).unwrap();
    let err = fetcher()
        .fetch(&url, &tmp.path().join("x.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NetworkError(_)));
}
