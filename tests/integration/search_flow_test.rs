// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{build_app, post_json, reply_text, settings_for};
use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COVER_BYTES: &[u8] = b"raw cover bytes";

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/jable.tv/search/SSIS-001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            concat!(
                r#"<a href="{uri}/videos/ssis-001-trailer/" title="SSIS-001 预告">"#,
                r#"<a href="{uri}/videos/ssis-001/" title="SSIS-001 Full">"#,
            ),
            uri = server.uri()
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos/ssis-001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<meta property="og:image" content="{}/covers/ssis-001.jpg">"#,
            server.uri()
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/covers/ssis-001.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(COVER_BYTES))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_returns_status_line_then_cover_and_details() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let mut settings = settings_for(&server.uri());
    settings.search.error_keywords = vec!["预告".to_string()];
    let app = build_app(&settings);

    let (status, body) = post_json(app, "/v1/search", json!({ "text": "番号 SSIS-001 ?" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        reply_text(&body, 0),
        "Searching for \"SSIS-001\" (all) results..."
    );
    let parts = body["replies"][1]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["type"], "image");
    assert_eq!(parts[0]["base64"], STANDARD.encode(COVER_BYTES));
    assert_eq!(
        parts[1]["text"],
        format!("SSIS-001 Full\n{}/videos/ssis-001/", server.uri())
    );
}

#[tokio::test]
async fn search_without_details_returns_image_only() {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let mut settings = settings_for(&server.uri());
    settings.search.error_keywords = vec!["预告".to_string()];
    settings.search.return_details = false;
    let app = build_app(&settings);

    let (_, body) = post_json(app, "/v1/search", json!({ "text": "SSIS-001" })).await;

    let parts = body["replies"][1]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0]["type"], "image");
}

#[tokio::test]
async fn search_falls_back_when_every_engine_fails() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = build_app(&settings_for(&server.uri()));
    let (status, body) = post_json(app, "/v1/search", json!({ "text": "ABP-123" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["replies"].as_array().unwrap().len(), 2);
    assert_eq!(
        reply_text(&body, 1),
        "No engine found any results, you can try:\nGoogle search: https://www.google.com/search?q=ABP-123%20jav"
    );
}

#[tokio::test]
async fn search_without_code_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(&settings_for(&server.uri()));
    let (_, body) = post_json(app, "/v1/search", json!({ "text": "no code here" })).await;

    assert_eq!(body["replies"].as_array().unwrap().len(), 1);
    assert_eq!(
        reply_text(&body, 0),
        "No valid code found in \"no code here\"."
    );
}

#[tokio::test]
async fn empty_search_text_prompts_for_input() {
    let app = build_app(&settings_for("http://127.0.0.1:1"));
    let (_, body) = post_json(app, "/v1/search", json!({ "text": "" })).await;
    assert_eq!(reply_text(&body, 0), "Please enter a code to search.");
}
