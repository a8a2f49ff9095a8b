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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, HttpEngine, HttpMethod};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现，持有进程内唯一的连接池。代理、TLS 与默认超时在构建时确定
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据 HTTP 配置构建客户端
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP 配置（代理、超时、User-Agent、TLS）
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 构建成功
    /// * `Err(EngineError)` - 代理地址无效或客户端构建失败
    pub fn new(settings: &HttpSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90));

        // Handle proxy
        if let Some(proxy_url) = settings.proxy_url() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| EngineError::Other(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        // Handle TLS verification
        if settings.skip_tls_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpEngine for ReqwestEngine {
    /// 执行HTTP请求
    ///
    /// 非 2xx 状态码不视为错误，由调用方按状态码决定如何处理
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        // Build headers
        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(k, v);
            }
        }

        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                self.client
                    .post(&request.url)
                    .body(request.body.clone().unwrap_or_default())
            }
        };

        debug!("Requesting {} ({:?})", request.url, request.method);

        let start = Instant::now();
        let response = builder
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let body = response.bytes().await?;

        Ok(FetchResponse {
            status_code,
            final_url,
            body,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
