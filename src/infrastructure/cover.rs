// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{CoverRuleEntry, CoverSettings, HttpSettings};
use crate::domain::models::cover::CoverImage;
use crate::domain::search::engine::CoverSource;
use crate::engines::traits::{fetch_with_deadline, FetchRequest, FetchResponse, HttpEngine};
use crate::utils::image_processing::prepare_cover;
use crate::utils::url_utils::{authority, resolve_url};
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// 按域名匹配的封面提取规则，正则的第 1 个捕获组是封面地址
#[derive(Debug, Clone)]
pub struct CoverRule {
    pub domain: String,
    pub pattern: Regex,
}

impl CoverRule {
    /// 编译配置中的规则，写法不完整或正则无效的条目会被跳过
    pub fn compile_all(entries: &[CoverRuleEntry]) -> Vec<CoverRule> {
        entries
            .iter()
            .filter_map(|entry| {
                let Some((domain, regex)) = entry.parts() else {
                    warn!("Skipping incomplete cover rule: {:?}", entry);
                    return None;
                };
                match Regex::new(regex) {
                    Ok(pattern) => Some(CoverRule {
                        domain: domain.to_string(),
                        pattern,
                    }),
                    Err(e) => {
                        warn!("Skipping invalid cover rule for {}: {}", domain, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// 封面解析器
///
/// 详情页 → 按域名规则找到封面地址 → 下载图片 → 模糊 → base64
pub struct CoverResolver {
    engine: Arc<dyn HttpEngine>,
    rules: Vec<CoverRule>,
    mosaic_level: f32,
    timeout: Duration,
    user_agent: String,
}

impl CoverResolver {
    pub fn new(engine: Arc<dyn HttpEngine>, cover: &CoverSettings, http: &HttpSettings) -> Self {
        Self {
            engine,
            rules: CoverRule::compile_all(&cover.cover_regexes),
            mosaic_level: cover.cover_mosaic_level,
            timeout: http.timeout(),
            user_agent: http.user_agent.clone(),
        }
    }

    pub fn rules(&self) -> &[CoverRule] {
        &self.rules
    }

    /// 在详情页中查找封面地址
    ///
    /// 第一条域名相同且正则命中的规则生效；相对地址按 `https://{host}` 补全
    pub fn find_cover_url(&self, page_url: &str, html: &str) -> Option<String> {
        let host = authority(page_url)?;

        let candidate = self
            .rules
            .iter()
            .filter(|rule| rule.domain == host)
            .find_map(|rule| rule.pattern.captures(html)?.get(1))?
            .as_str();

        if candidate.starts_with("http") {
            return Some(candidate.to_string());
        }

        let base = Url::parse(&format!("https://{}/", host)).ok()?;
        resolve_url(&base, candidate).ok().map(String::from)
    }

    async fn get(&self, url: &str) -> Option<FetchResponse> {
        let request =
            FetchRequest::get(url, self.timeout).header("User-Agent", self.user_agent.clone());
        match fetch_with_deadline(self.engine.as_ref(), &request).await {
            Ok(response) if response.is_success() => Some(response),
            Ok(response) => {
                debug!("GET {} returned {}", url, response.status_code);
                None
            }
            Err(e) => {
                warn!("GET {} failed: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl CoverSource for CoverResolver {
    async fn resolve_cover(&self, page_url: &str) -> Option<CoverImage> {
        let page = self.get(page_url).await?;
        let Some(cover_url) = self.find_cover_url(page_url, &page.text()) else {
            debug!("No cover rule matched {}", page_url);
            return None;
        };

        let image = self.get(&cover_url).await?;
        let level = self.mosaic_level;
        let processed =
            tokio::task::spawn_blocking(move || prepare_cover(&image.body, level)).await;

        match processed {
            Ok(Ok(base64)) => Some(CoverImage::new(base64)),
            Ok(Err(e)) => {
                warn!("Failed to process cover {}: {}", cover_url, e);
                None
            }
            Err(e) => {
                warn!("Cover processing task failed: {}", e);
                None
            }
        }
    }
}
