// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::reply::Reply;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 番号搜索请求，空文本交给服务层给出提示
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[serde(default)]
    #[validate(length(max = 1000, message = "Text is too long"))]
    pub text: String,
}

/// 一次命令产生的全部回复，按发送顺序排列
#[derive(Debug, Serialize)]
pub struct RepliesDto {
    pub replies: Vec<Reply>,
}

impl From<Vec<Reply>> for RepliesDto {
    fn from(replies: Vec<Reply>) -> Self {
        Self { replies }
    }
}

impl From<Reply> for RepliesDto {
    fn from(reply: Reply) -> Self {
        Self {
            replies: vec![reply],
        }
    }
}
