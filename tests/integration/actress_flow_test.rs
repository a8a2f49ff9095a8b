// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{build_app, post_json, reply_text, settings_for};
use codehound::infrastructure::biography::BiographySourceConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source(name: &str, server_uri: &str, min_year: Option<i32>) -> BiographySourceConfig {
    BiographySourceConfig {
        name: name.to_string(),
        url_template: format!("{}/{}/{{name}}", server_uri, name),
        year_pattern: Some(r"year=([0-9]{4})".to_string()),
        height_pattern: Some(r"height=([0-9]{3})".to_string()),
        measurements_pattern: Some(r"size=([A-Z0-9 ]+);".to_string()),
        min_year,
    }
}

async fn mount(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn actress_lookup_merges_sources_by_priority() {
    let server = MockServer::start().await;
    mount(&server, "/a/someone", "year=1990").await;
    mount(&server, "/b/someone", "year=1930 height=170").await;
    mount(&server, "/c/someone", "year=1991 height=150 size=B85 W58 H86;").await;

    let mut settings = settings_for(&server.uri());
    settings.actress.sources = vec![
        source("a", &server.uri(), None),
        source("b", &server.uri(), Some(1950)),
        source("c", &server.uri(), None),
    ];
    let app = build_app(&settings);

    let (_, body) = post_json(app, "/v1/actress", json!({ "name": "someone" })).await;

    assert_eq!(body["replies"].as_array().unwrap().len(), 1);
    assert_eq!(
        reply_text(&body, 0),
        "someone\nBorn: 1990\nHeight: 🔥170\nMeasurements: B85 W58 H86"
    );
}

#[tokio::test]
async fn actress_lookup_without_information() {
    let server = MockServer::start().await;
    mount(&server, "/a/nobody", "<html>nothing</html>").await;

    let mut settings = settings_for(&server.uri());
    settings.actress.sources = vec![
        source("a", &server.uri(), None),
        source("b", &server.uri(), None),
    ];
    let app = build_app(&settings);

    let (_, body) = post_json(app, "/v1/actress", json!({ "name": "nobody" })).await;
    assert_eq!(
        reply_text(&body, 0),
        "No information found for \"nobody\"."
    );
}
