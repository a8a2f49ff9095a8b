// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{build_app, post_json, reply_text, settings_for};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::util::ServiceExt;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let app = build_app(&settings_for("http://127.0.0.1:1"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn version_reports_package_version() {
    let app = build_app(&settings_for("http://127.0.0.1:1"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], env!("CARGO_PKG_VERSION").as_bytes());
}

/// 超长文本被验证拦截
#[tokio::test]
async fn oversized_search_text_is_rejected() {
    let app = build_app(&settings_for("http://127.0.0.1:1"));
    let (status, body) = post_json(
        app,
        "/v1/search",
        serde_json::json!({ "text": "a".repeat(2000) }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reply_text(&body, 0).starts_with("Invalid request: "));
}
