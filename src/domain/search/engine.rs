// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::code::Code;
use crate::domain::models::cover::CoverImage;
use crate::domain::models::search_result::SearchResult;
use crate::engines::traits::{EngineError, HttpMethod};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// 配置字符串中 URL 与 POST 表单之间的分隔符
pub const POST_DELIMITER: &str = "#POST#";
/// 番号占位符
pub const CODE_PLACEHOLDER: &str = "%s";

/// 单个站点在一次爬取中的失败原因
///
/// 只在该站点的分支内部使用，最终都会降级为空结果
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Invalid source spec: {0}")]
    InvalidSpec(String),
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Timeout")]
    Timeout,
    #[error("Extraction error: {0}")]
    Extraction(String),
}

/// 搜索分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    /// 有码
    Censored,
    /// 无码
    Uncensored,
}

impl SearchCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Censored => "censored",
            Self::Uncensored => "uncensored",
        }
    }
}

/// 搜索模式，决定要爬取哪些分类
///
/// 同时接受英文值与原有的中文配置值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SearchMode {
    #[default]
    #[serde(rename = "all", alias = "全部")]
    All,
    #[serde(rename = "censored", alias = "仅有码")]
    CensoredOnly,
    #[serde(rename = "uncensored", alias = "仅无码")]
    UncensoredOnly,
}

impl SearchMode {
    pub fn includes(self, category: SearchCategory) -> bool {
        match self {
            Self::All => true,
            Self::CensoredOnly => category == SearchCategory::Censored,
            Self::UncensoredOnly => category == SearchCategory::Uncensored,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CensoredOnly => "censored only",
            Self::UncensoredOnly => "uncensored only",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 站点请求模板
///
/// 配置格式为 `URL[#POST#表单]`，两部分中的 `%s` 都会被替换为番号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub url_template: String,
    pub method: HttpMethod,
    pub payload_template: Option<String>,
}

/// 替换占位符之后的具体请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<String>,
}

impl SourceSpec {
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let mut parts = raw.splitn(2, POST_DELIMITER);
        let url_template = parts.next().unwrap_or_default().trim();
        if url_template.is_empty() {
            return Err(SourceError::InvalidSpec(format!(
                "missing url in '{}'",
                raw
            )));
        }

        let payload_template = parts.next().map(str::to_string);
        let method = if payload_template.is_some() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        };

        Ok(Self {
            url_template: url_template.to_string(),
            method,
            payload_template,
        })
    }

    pub fn render(&self, code: &Code) -> SourceRequest {
        SourceRequest {
            url: self.url_template.replace(CODE_PLACEHOLDER, code.as_str()),
            method: self.method,
            body: self
                .payload_template
                .as_ref()
                .map(|payload| payload.replace(CODE_PLACEHOLDER, code.as_str())),
        }
    }
}

/// 按分类搜索的能力
///
/// 实现方负责并发请求该分类下配置的所有站点，单个站点失败只会让该站点贡献空结果
#[async_trait]
pub trait CategorySearch: Send + Sync {
    async fn search_category(&self, code: &Code, category: SearchCategory) -> Vec<SearchResult>;
}

/// 封面获取能力，任何失败都表现为 None
#[async_trait]
pub trait CoverSource: Send + Sync {
    async fn resolve_cover(&self, page_url: &str) -> Option<CoverImage>;
}
