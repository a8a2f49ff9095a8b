// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use codehound::config::settings::{
    ActressSettings, CoverRuleEntry, CoverSettings, HttpSettings, SearchSettings, ServerSettings,
    Settings,
};
use codehound::domain::services::actress_service::ActressService;
use codehound::domain::services::result_aggregator::{RankingPolicy, ResultAggregator};
use codehound::domain::services::search_service::SearchService;
use codehound::engines::reqwest_engine::ReqwestEngine;
use codehound::engines::traits::HttpEngine;
use codehound::infrastructure::biography::RegexBiographySource;
use codehound::infrastructure::cover::CoverResolver;
use codehound::infrastructure::search::{AdapterTable, Crawler};
use codehound::presentation::routes;
use codehound::utils::url_utils::authority;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// 指向测试服务器的配置：无默认站点、无封面规则、无资料来源
pub fn settings_for(server_uri: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        http: HttpSettings {
            timeout: 2,
            ..HttpSettings::default()
        },
        search: SearchSettings {
            censored_engines: vec![format!("{}/jable.tv/search/%s/", server_uri)],
            uncensored_engines: Vec::new(),
            ..SearchSettings::default()
        },
        cover: CoverSettings {
            cover_regexes: vec![CoverRuleEntry::Table {
                domain: authority(server_uri).unwrap_or_default(),
                regex: r#"<meta property="og:image" content="([^"]+)""#.to_string(),
            }],
            cover_mosaic_level: 0.0,
        },
        actress: ActressSettings {
            height_highlight: 168,
            sources: Vec::new(),
        },
    }
}

/// 按 main 中的方式组装完整应用
pub fn build_app(settings: &Settings) -> Router {
    let engine: Arc<dyn HttpEngine> = Arc::new(ReqwestEngine::new(&settings.http).unwrap());

    let crawler = Arc::new(Crawler::new(
        engine.clone(),
        Arc::new(AdapterTable::builtin()),
        &settings.search,
        &settings.http,
    ));
    let covers = Arc::new(CoverResolver::new(
        engine.clone(),
        &settings.cover,
        &settings.http,
    ));
    let search = Arc::new(SearchService::new(
        crawler,
        covers,
        ResultAggregator::new(
            settings.search.error_keywords.clone(),
            RankingPolicy {
                decensored_first: settings.search.mosaic_reduce_first,
            },
        ),
        settings.search.search_mode,
        settings.search.return_details,
    ));

    let sources =
        RegexBiographySource::from_configs(&settings.actress.sources, engine, &settings.http);
    let actress = Arc::new(ActressService::new(
        sources,
        settings.actress.height_highlight,
    ));

    routes::app(search, actress)
}

/// 发送 JSON POST 请求并返回状态码与响应体
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// 取出第 n 条回复的所有文本片段并拼接
pub fn reply_text(body: &Value, index: usize) -> String {
    body["replies"][index]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}
