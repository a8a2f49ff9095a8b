// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{HttpSettings, SearchSettings};
use crate::domain::models::code::Code;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{CategorySearch, SearchCategory, SourceError, SourceSpec};
use crate::engines::traits::{fetch_with_deadline, EngineError, FetchRequest, FetchResponse, HttpEngine, HttpMethod};
use crate::infrastructure::search::adapters::{AdapterTable, Extraction};
use crate::utils::url_utils::authority;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 多站点爬虫
///
/// 同一分类下的所有站点并发请求，每个请求有独立的超时；
/// 单个站点失败只记录日志并贡献空结果，输出顺序与配置顺序一致
pub struct Crawler {
    engine: Arc<dyn HttpEngine>,
    adapters: Arc<AdapterTable>,
    censored: Vec<String>,
    uncensored: Vec<String>,
    timeout: Duration,
    user_agent: String,
}

impl Crawler {
    pub fn new(
        engine: Arc<dyn HttpEngine>,
        adapters: Arc<AdapterTable>,
        search: &SearchSettings,
        http: &HttpSettings,
    ) -> Self {
        Self {
            engine,
            adapters,
            censored: search.censored_engines.clone(),
            uncensored: search.uncensored_engines.clone(),
            timeout: http.timeout(),
            user_agent: http.user_agent.clone(),
        }
    }

    /// 分类对应的站点配置
    pub fn engines_for(&self, category: SearchCategory) -> &[String] {
        match category {
            SearchCategory::Censored => &self.censored,
            SearchCategory::Uncensored => &self.uncensored,
        }
    }

    /// 并发爬取给定的站点列表
    ///
    /// 等待所有站点完成（成功或失败）后按配置顺序拼接结果
    pub async fn crawl(
        &self,
        code: &Code,
        specs: &[String],
        category: SearchCategory,
    ) -> Vec<SearchResult> {
        let futures = specs.iter().map(|raw| async move {
            let site = site_name(raw);
            match self.crawl_source(code, raw, category).await {
                Ok(results) => {
                    debug!("Engine {} returned {} results", site, results.len());
                    results
                }
                Err(e) => {
                    warn!("Engine {} failed for {}: {}", site, code, e);
                    Vec::new()
                }
            }
        });

        let results: Vec<SearchResult> = join_all(futures).await.into_iter().flatten().collect();
        info!(
            "Crawled {} {} engines for {}: {} results",
            specs.len(),
            category.name(),
            code,
            results.len()
        );
        results
    }

    async fn crawl_source(
        &self,
        code: &Code,
        raw: &str,
        category: SearchCategory,
    ) -> Result<Vec<SearchResult>, SourceError> {
        let request = SourceSpec::parse(raw)?.render(code);
        debug!("Requesting {} ({:?})", request.url, request.method);

        let fetch = match (request.method, request.body) {
            (HttpMethod::Post, Some(body)) => {
                FetchRequest::post_form(request.url, body, self.timeout)
            }
            _ => FetchRequest::get(request.url, self.timeout),
        };
        let response = self.send(fetch).await?;

        let Some(adapter) = self.adapters.select(&response.final_url) else {
            debug!("No adapter for {}", response.final_url);
            return Ok(Vec::new());
        };

        match adapter.extract(&response.final_url, &response.text(), code, category)? {
            Extraction::Results(results) => Ok(results),
            Extraction::FollowUp(pending) => {
                debug!("Following up {}", pending.url);
                let detail = self
                    .send(FetchRequest::get(pending.url.clone(), self.timeout))
                    .await?;
                Ok(pending.resolve(&detail.text()))
            }
        }
    }

    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, SourceError> {
        let request = request.header("User-Agent", self.user_agent.clone());
        let response = fetch_with_deadline(self.engine.as_ref(), &request)
            .await
            .map_err(|e| match e {
                EngineError::Timeout => SourceError::Timeout,
                EngineError::RequestFailed(e) if e.is_timeout() => SourceError::Timeout,
                other => SourceError::Engine(other),
            })?;

        debug!(
            "{} responded {} in {}ms",
            response.final_url, response.status_code, response.response_time_ms
        );

        if !response.is_success() {
            return Err(SourceError::Status(response.status_code));
        }
        Ok(response)
    }
}

#[async_trait]
impl CategorySearch for Crawler {
    async fn search_category(&self, code: &Code, category: SearchCategory) -> Vec<SearchResult> {
        self.crawl(code, self.engines_for(category), category).await
    }
}

fn site_name(raw: &str) -> String {
    authority(raw).unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
#[path = "crawler_test.rs"]
mod tests;
