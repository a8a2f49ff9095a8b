// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::utils::text_encoding::decode_body;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 请求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 请求方法
    pub method: HttpMethod,
    /// 请求头
    pub headers: HashMap<String, String>,
    /// 表单请求体（application/x-www-form-urlencoded）
    pub body: Option<String>,
    /// 超时时间
    pub timeout: Duration,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            body: None,
            timeout,
        }
    }

    pub fn post_form(url: impl Into<String>, body: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: HashMap::new(),
            body: Some(body.into()),
            timeout,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 跟随重定向之后的最终URL
    pub final_url: String,
    /// 原始响应体
    pub body: Bytes,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 按 `Content-Type` 声明的编码解码响应体，原始字节仍保留在 `body` 中
    pub fn text(&self) -> String {
        decode_body(&self.body, &self.content_type)
    }
}

/// HTTP 引擎特质
///
/// 进程内只创建一个实现并在各组件之间共享
#[async_trait]
pub trait HttpEngine: Send + Sync {
    /// 执行请求
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// 在请求自身的超时之外再套一层超时，保证单个慢请求不会拖住调用方
pub async fn fetch_with_deadline(
    engine: &dyn HttpEngine,
    request: &FetchRequest,
) -> Result<FetchResponse, EngineError> {
    match tokio::time::timeout(request.timeout, engine.fetch(request)).await {
        Ok(result) => result,
        Err(_) => Err(EngineError::Timeout),
    }
}
