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

use crate::domain::search::engine::SearchMode;
use crate::infrastructure::biography::{default_sources, BiographySourceConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// 应用程序配置设置
///
/// 包含服务器、HTTP 客户端、搜索、封面和演员资料等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// HTTP 客户端配置
    #[serde(default)]
    pub http: HttpSettings,
    /// 搜索配置
    #[serde(default)]
    pub search: SearchSettings,
    /// 封面配置
    #[serde(default)]
    pub cover: CoverSettings,
    /// 演员资料配置
    #[serde(default)]
    pub actress: ActressSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// HTTP 客户端配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// 代理地址，空字符串视为未配置
    pub proxy: Option<String>,
    /// 每个请求的超时时间（秒）
    pub timeout: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 是否跳过TLS验证
    pub skip_tls_verification: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            skip_tls_verification: false,
        }
    }
}

impl HttpSettings {
    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy
            .as_deref()
            .map(str::trim)
            .filter(|proxy| !proxy.is_empty())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// 搜索模式
    pub search_mode: SearchMode,
    /// 有码站点列表，格式为 `URL[#POST#表单]`
    pub censored_engines: Vec<String>,
    /// 无码站点列表
    pub uncensored_engines: Vec<String>,
    /// 标题中包含任一关键字的结果会被丢弃
    pub error_keywords: Vec<String>,
    /// 排序时优先"破解"而不是"中字"
    pub mosaic_reduce_first: bool,
    /// 是否在图片之外返回标题和链接
    pub return_details: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::All,
            censored_engines: default_censored_engines(),
            uncensored_engines: default_uncensored_engines(),
            error_keywords: Vec::new(),
            mosaic_reduce_first: false,
            return_details: true,
        }
    }
}

/// 封面规则的两种配置写法
///
/// `"domain|regex"` 字符串，或 `{ domain = "...", regex = "..." }` 表
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CoverRuleEntry {
    Inline(String),
    Table { domain: String, regex: String },
}

impl CoverRuleEntry {
    /// 拆分为 (域名, 正则)，写法不完整时返回 None
    pub fn parts(&self) -> Option<(&str, &str)> {
        let (domain, regex) = match self {
            Self::Inline(raw) => raw.split_once('|')?,
            Self::Table { domain, regex } => (domain.as_str(), regex.as_str()),
        };
        if domain.is_empty() || regex.is_empty() {
            return None;
        }
        Some((domain, regex))
    }
}

/// 封面配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoverSettings {
    /// 按域名匹配的封面提取规则，按顺序尝试
    pub cover_regexes: Vec<CoverRuleEntry>,
    /// 模糊强度，0 表示原图返回
    pub cover_mosaic_level: f32,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            cover_regexes: default_cover_regexes(),
            cover_mosaic_level: 0.3,
        }
    }
}

/// 演员资料配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActressSettings {
    /// 身高达到该值（厘米）时加上装饰前缀
    pub height_highlight: u32,
    /// 资料来源，按优先级排列
    pub sources: Vec<BiographySourceConfig>,
}

impl Default for ActressSettings {
    fn default() -> Self {
        Self {
            height_highlight: 168,
            sources: default_sources(),
        }
    }
}

fn default_censored_engines() -> Vec<String> {
    [
        "https://supjav.com/zh/?s=%s",
        "https://7mmtv.sx/zh/searchform_search/all/index.html#POST#search_keyword=%s&search_type=searchall&op=search",
        "https://missav.ai/cn/search/%s",
        "https://jable.tv/search/%s/",
        "https://jav.guru/?s=%s",
        "https://123av.com/zh/search?keyword=%s",
        "https://jav777.xyz/?s=%s",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_uncensored_engines() -> Vec<String> {
    [
        "https://7mmtv.sx/zh/searchform_search/all/index.html#POST#search_keyword=%s&search_type=uncensored&op=search",
        "https://missav.ai/cn/search/%s",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_cover_regexes() -> Vec<CoverRuleEntry> {
    [
        r#"supjav.com|<img[^>]*class="[^"]*wp-post-image[^"]*"[^>]*src="([^"]+)""#,
        r#"7mmtv.sx|<meta property="og:image" content="([^"]+)""#,
        r#"missav.ai|<meta property="og:image" content="([^"]+)""#,
        r#"jable.tv|<meta property="og:image" content="([^"]+)""#,
        r#"jav.guru|<meta property="og:image" content="([^"]+)""#,
        r#"123av.com|<meta property="og:image" content="([^"]+)""#,
        r#"jav777.xyz|<meta property="og:image" content="([^"]+)""#,
    ]
    .into_iter()
    .map(|rule| CoverRuleEntry::Inline(rule.to_string()))
    .collect()
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与 `CODEHOUND__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::base_builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CODEHOUND")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("search.error_keywords")
                    .with_list_parse_key("search.censored_engines")
                    .with_list_parse_key("search.uncensored_engines"),
            )
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置（不读取环境变量）
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::base_builder()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
