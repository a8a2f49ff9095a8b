// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{CategorySearch, CoverSource};
use crate::domain::services::actress_service::ActressService;
use crate::domain::services::search_service::SearchService;
use crate::presentation::handlers::{actress_handler, search_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 命令路由依赖通过 `Extension` 注入的服务实例
pub fn routes<S, C>() -> Router
where
    S: CategorySearch + 'static,
    C: CoverSource + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let command_routes = Router::new()
        .route("/v1/search", post(search_handler::search::<S, C>))
        .route("/v1/actress", post(actress_handler::lookup));

    Router::new().merge(public_routes).merge(command_routes)
}

/// 组装完整应用：路由 + 服务注入 + 请求追踪
pub fn app<S, C>(search: Arc<SearchService<S, C>>, actress: Arc<ActressService>) -> Router
where
    S: CategorySearch + 'static,
    C: CoverSource + 'static,
{
    routes::<S, C>()
        .layer(Extension(search))
        .layer(Extension(actress))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
