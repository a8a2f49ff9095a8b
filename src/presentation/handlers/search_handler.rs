// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::{
    application::dto::search_request::{RepliesDto, SearchRequestDto},
    domain::{
        models::reply::Reply,
        search::engine::{CategorySearch, CoverSource},
        services::search_service::SearchService,
    },
    presentation::errors::AppError,
};

/// 服务内部出现意外失败时返回给用户的提示
pub const SEARCH_FAILED_NOTICE: &str = "Search failed, please try again later.";

/// 处理番号搜索命令
///
/// 服务在独立任务中运行，单次调用的 panic 不会影响其他请求
///
/// # 错误
///
/// 请求参数验证失败时返回 400
pub async fn search<S, C>(
    Extension(service): Extension<Arc<SearchService<S, C>>>,
    Json(payload): Json<SearchRequestDto>,
) -> Result<Json<RepliesDto>, AppError>
where
    S: CategorySearch + 'static,
    C: CoverSource + 'static,
{
    payload.validate()?;

    let text = payload.text;
    let replies = match tokio::spawn(async move { service.search(&text).await }).await {
        Ok(replies) => replies,
        Err(e) => {
            error!("Search task failed: {}", e);
            vec![Reply::text(SEARCH_FAILED_NOTICE)]
        }
    };

    Ok(Json(replies.into()))
}
