// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::domain::models::actress::ActressInfo;
use crate::domain::services::actress_service::BiographySource;
use crate::engines::traits::{fetch_with_deadline, FetchRequest, HttpEngine};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// 模板中的姓名占位符，替换时会做 URL 编码
const NAME_PLACEHOLDER: &str = "{name}";

/// 演员资料来源配置
///
/// 每个字段的正则取第 1 个捕获组，捕获为空时视为缺失
#[derive(Debug, Clone, Deserialize)]
pub struct BiographySourceConfig {
    pub name: String,
    pub url_template: String,
    pub year_pattern: Option<String>,
    pub height_pattern: Option<String>,
    pub measurements_pattern: Option<String>,
    /// 小于该值的年份视为误匹配并丢弃
    #[serde(default)]
    pub min_year: Option<i32>,
}

/// 默认的三个资料来源，按优先级排列
pub fn default_sources() -> Vec<BiographySourceConfig> {
    vec![
        BiographySourceConfig {
            name: "xslist".to_string(),
            url_template: "https://xslist.org/search?query={name}&lg=zh".to_string(),
            year_pattern: Some(r"出生[^0-9]*([0-9]{4})年".to_string()),
            height_pattern: Some(r"身高[^0-9]*([0-9]{3})\s*cm".to_string()),
            measurements_pattern: Some(r"(B[0-9]{2,3}\s*W[0-9]{2,3}\s*H[0-9]{2,3})".to_string()),
            min_year: None,
        },
        BiographySourceConfig {
            name: "wikipedia".to_string(),
            url_template: "https://ja.wikipedia.org/wiki/{name}".to_string(),
            year_pattern: Some(r"([0-9]{4})年[0-9]{1,2}月[0-9]{1,2}日".to_string()),
            height_pattern: Some(r"身長[^0-9]*([0-9]{3})\s*cm".to_string()),
            measurements_pattern: Some(
                r"スリーサイズ[^0-9]*([0-9]{2,3}\s*-\s*[0-9]{2,3}\s*-\s*[0-9]{2,3})".to_string(),
            ),
            min_year: Some(1950),
        },
        BiographySourceConfig {
            name: "minnano-av".to_string(),
            url_template: "https://www.minnano-av.com/search_result.php?search_word={name}"
                .to_string(),
            year_pattern: Some(r"生年月日[^0-9]*([0-9]{4})年".to_string()),
            height_pattern: Some(r"T([0-9]{3})".to_string()),
            measurements_pattern: Some(r"(B[0-9]{2,3}[^/]*/\s*W[0-9]{2,3}\s*/\s*H[0-9]{2,3})".to_string()),
            min_year: None,
        },
    ]
}

/// 基于正则的资料来源
pub struct RegexBiographySource {
    name: String,
    url_template: String,
    year: Option<Regex>,
    height: Option<Regex>,
    measurements: Option<Regex>,
    min_year: Option<i32>,
    engine: Arc<dyn HttpEngine>,
    timeout: Duration,
    user_agent: String,
}

impl RegexBiographySource {
    /// 编译来源配置，无效的字段正则会被忽略
    pub fn new(config: &BiographySourceConfig, engine: Arc<dyn HttpEngine>, http: &HttpSettings) -> Self {
        let compile = |field: &str, pattern: &Option<String>| {
            pattern.as_deref().and_then(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!("Ignoring invalid {} pattern for {}: {}", field, config.name, e);
                    None
                }
            })
        };

        Self {
            name: config.name.clone(),
            url_template: config.url_template.clone(),
            year: compile("year", &config.year_pattern),
            height: compile("height", &config.height_pattern),
            measurements: compile("measurements", &config.measurements_pattern),
            min_year: config.min_year,
            engine,
            timeout: http.timeout(),
            user_agent: http.user_agent.clone(),
        }
    }

    pub fn from_configs(
        configs: &[BiographySourceConfig],
        engine: Arc<dyn HttpEngine>,
        http: &HttpSettings,
    ) -> Vec<Arc<dyn BiographySource>> {
        configs
            .iter()
            .map(|config| {
                Arc::new(RegexBiographySource::new(config, engine.clone(), http))
                    as Arc<dyn BiographySource>
            })
            .collect()
    }

    pub fn url_for(&self, name: &str) -> String {
        self.url_template
            .replace(NAME_PLACEHOLDER, &urlencoding::encode(name))
    }

    /// 从页面中提取资料，所有字段都缺失时返回 None
    pub fn parse(&self, html: &str) -> Option<ActressInfo> {
        let year = capture(self.year.as_ref(), html).filter(|year| self.plausible_year(year));
        let info = ActressInfo {
            year,
            height: capture(self.height.as_ref(), html),
            measurements: capture(self.measurements.as_ref(), html),
        };
        (!info.is_empty()).then_some(info)
    }

    fn plausible_year(&self, year: &str) -> bool {
        match (self.min_year, year.parse::<i32>()) {
            (Some(min), Ok(year)) if year < min => {
                debug!("Source {} discarded implausible year {}", self.name, year);
                false
            }
            _ => true,
        }
    }
}

fn capture(regex: Option<&Regex>, html: &str) -> Option<String> {
    let value = regex?.captures(html)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[async_trait]
impl BiographySource for RegexBiographySource {
    async fn fetch(&self, name: &str) -> Option<ActressInfo> {
        let url = self.url_for(name);
        let request =
            FetchRequest::get(url.as_str(), self.timeout).header("User-Agent", self.user_agent.clone());

        match fetch_with_deadline(self.engine.as_ref(), &request).await {
            Ok(response) if response.is_success() => self.parse(&response.text()),
            Ok(response) => {
                debug!("Source {} returned {} for {}", self.name, response.status_code, url);
                None
            }
            Err(e) => {
                warn!("Source {} failed for {}: {}", self.name, url, e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
