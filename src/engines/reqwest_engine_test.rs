// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::{EngineError, FetchRequest, HttpEngine};
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine() -> ReqwestEngine {
    ReqwestEngine::new(&HttpSettings::default()).unwrap()
}

#[tokio::test]
async fn test_reqwest_engine_basic_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><body>Test content</body></html>"),
        )
        .mount(&server)
        .await;

    let request = FetchRequest::get(format!("{}/test", server.uri()), Duration::from_secs(5));
    let response = engine().fetch(&request).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.is_success());
    assert!(response.text().contains("Test content"));
    assert!(response.content_type.contains("text/html"));
    assert_eq!(response.final_url, format!("{}/test", server.uri()));
}

#[tokio::test]
async fn test_reqwest_engine_reports_final_url_after_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", "/canonical/page"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/canonical/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let request = FetchRequest::get(format!("{}/old", server.uri()), Duration::from_secs(5));
    let response = engine().fetch(&request).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.final_url,
        format!("{}/canonical/page", server.uri())
    );
    assert_eq!(response.text(), "moved");
}

#[tokio::test]
async fn test_reqwest_engine_posts_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("keyword=ABC-123&op=search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("posted"))
        .expect(1)
        .mount(&server)
        .await;

    let request = FetchRequest::post_form(
        format!("{}/search", server.uri()),
        "keyword=ABC-123&op=search",
        Duration::from_secs(5),
    );
    let response = engine().fetch(&request).await.unwrap();

    assert_eq!(response.text(), "posted");
}

#[tokio::test]
async fn test_reqwest_engine_error_status_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = FetchRequest::get(format!("{}/error", server.uri()), Duration::from_secs(5));
    let response = engine().fetch(&request).await.unwrap();

    assert_eq!(response.status_code, 500);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_reqwest_engine_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let request = FetchRequest::get(
        format!("{}/slow", server.uri()),
        Duration::from_millis(200),
    );
    let result = engine().fetch(&request).await;

    assert!(matches!(result, Err(EngineError::RequestFailed(e)) if e.is_timeout()));
}

#[test]
fn test_reqwest_engine_rejects_invalid_proxy() {
    let settings = HttpSettings {
        proxy: Some("http://[::1".to_string()),
        ..HttpSettings::default()
    };
    assert!(matches!(
        ReqwestEngine::new(&settings),
        Err(EngineError::Other(_))
    ));
}

#[test]
fn test_reqwest_engine_name() {
    assert_eq!(engine().name(), "reqwest");
}

#[tokio::test]
async fn test_reqwest_engine_decodes_declared_charset() {
    let server = MockServer::start().await;
    let (gbk, _, _) = encoding_rs::GBK.encode("<a title=\"SSIS-001 中文字幕\">");
    Mock::given(method("GET"))
        .and(path("/gbk"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=gbk")
                .set_body_bytes(gbk.to_vec()),
        )
        .mount(&server)
        .await;

    let request = FetchRequest::get(format!("{}/gbk", server.uri()), Duration::from_secs(5));
    let response = engine().fetch(&request).await.unwrap();

    assert_eq!(response.body.as_ref(), gbk.as_ref());
    assert_eq!(response.text(), "<a title=\"SSIS-001 中文字幕\">");
}
