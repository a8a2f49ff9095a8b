// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::RepliesDto;
use crate::domain::models::reply::Reply;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use validator::ValidationErrors;

/// 内部错误时返回给用户的提示，不暴露错误细节
pub const REQUEST_FAILED_NOTICE: &str = "Request failed, please try again later.";

/// 处理器错误
///
/// 与正常响应一样以回复列表的形式返回：验证失败时回复验证信息，
/// 其他错误只记录日志并回复通用提示
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self.0.downcast_ref::<ValidationErrors>() {
            Some(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request: {}", errors),
            ),
            None => {
                error!("Request failed: {:#}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    REQUEST_FAILED_NOTICE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(RepliesDto::from(Reply::text(message)))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
