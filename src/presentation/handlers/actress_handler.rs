// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::{
    application::dto::{actress_request::ActressRequestDto, search_request::RepliesDto},
    domain::{models::reply::Reply, services::actress_service::ActressService},
    presentation::{errors::AppError, handlers::search_handler::SEARCH_FAILED_NOTICE},
};

/// 处理演员资料查询命令，始终返回一条文本回复
pub async fn lookup(
    Extension(service): Extension<Arc<ActressService>>,
    Json(payload): Json<ActressRequestDto>,
) -> Result<Json<RepliesDto>, AppError> {
    payload.validate()?;

    let name = payload.name;
    let reply = match tokio::spawn(async move { service.describe(&name).await }).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Actress lookup task failed: {}", e);
            Reply::text(SEARCH_FAILED_NOTICE)
        }
    };

    Ok(Json(reply.into()))
}
