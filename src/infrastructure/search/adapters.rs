// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::code::Code;
use crate::domain::models::search_result::{ResultTag, SearchResult};
use crate::domain::search::engine::{SearchCategory, SourceError};
use crate::utils::url_utils::{origin, resolve_url};
use lru::LruCache;
use once_cell::sync::Lazy;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use url::Url;

/// 单个站点最多保留的结果数
pub const MAX_RESULTS_PER_SOURCE: usize = 5;

/// 模板中的站点源（scheme://host[:port]）占位符
const ORIGIN_PLACEHOLDER: &str = "{origin}";
/// 模板中的番号占位符
const CODE_PLACEHOLDER: &str = "{code}";

/// 已编译的正则，键为替换占位符之后的完整模式
static PATTERN_CACHE: Lazy<Mutex<LruCache<String, Regex>>> = Lazy::new(|| {
    Mutex::new(LruCache::new(
        NonZeroUsize::new(256).expect("pattern cache size is non-zero"),
    ))
});

/// 标签触发条件检查的范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagScope {
    /// 结果链接
    Url,
    /// 未加标签的标题
    Title,
    /// 结果所在的整段 HTML（`Scoped` 规则为容器，其余为整个匹配）
    Container,
}

/// 命中任一关键字时给标题加上标签前缀
#[derive(Debug, Clone, Copy)]
pub struct TagTrigger {
    pub tag: ResultTag,
    pub scope: TagScope,
    pub needles: &'static [&'static str],
}

/// 提取规则
///
/// 正则模板中的 `{origin}` 与 `{code}` 会在提取时替换为转义后的值，
/// 第 1 个捕获组是链接，第 2 个捕获组是标题
#[derive(Debug, Clone, Copy)]
pub enum ExtractionRule {
    /// 在整页上逐个匹配结果
    Listing {
        item: &'static str,
        /// 拼接在链接前面的前缀，支持 `{origin}`
        url_prefix: Option<&'static str>,
    },
    /// 先切分结果容器，再在每个容器里取第一个匹配
    Scoped {
        container: &'static str,
        item: &'static str,
    },
    /// 结果需要再请求一次详情页才能确认
    FollowUp {
        /// 只有最终 URL 包含该片段时才继续
        only_if_url_contains: &'static str,
        /// 第 1 个捕获组为详情页链接
        link: &'static str,
        /// 详情页中必须出现的文本，支持 `{code}`
        confirm_marker: &'static str,
        /// 确认后生成的标题，支持 `{code}`
        title: &'static str,
    },
}

/// 站点适配器
#[derive(Debug, Clone)]
pub struct SourceAdapter {
    /// 最终 URL 中包含该片段即选中此适配器
    pub marker: &'static str,
    pub rule: ExtractionRule,
    pub triggers: Vec<TagTrigger>,
    /// 只有该分类的搜索才会加标签
    pub tag_category: SearchCategory,
}

/// 需要再请求一次的详情页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub url: String,
    pub confirm: String,
    pub title: String,
}

impl PendingFetch {
    /// 用详情页内容确认结果
    pub fn resolve(&self, body: &str) -> Vec<SearchResult> {
        if body.contains(&self.confirm) {
            vec![SearchResult::new(self.title.clone(), self.url.clone())]
        } else {
            Vec::new()
        }
    }
}

/// 提取结果：直接得到的结果，或者需要由调用方继续请求的详情页
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Results(Vec<SearchResult>),
    FollowUp(PendingFetch),
}

impl SourceAdapter {
    pub fn listing(marker: &'static str, item: &'static str) -> Self {
        Self {
            marker,
            rule: ExtractionRule::Listing {
                item,
                url_prefix: None,
            },
            triggers: Vec::new(),
            tag_category: SearchCategory::Censored,
        }
    }

    pub fn with_trigger(
        mut self,
        tag: ResultTag,
        scope: TagScope,
        needles: &'static [&'static str],
    ) -> Self {
        self.triggers.push(TagTrigger {
            tag,
            scope,
            needles,
        });
        self
    }

    /// 从页面中提取结果
    ///
    /// # Arguments
    ///
    /// * `final_url` - 跟随重定向之后的 URL
    /// * `body` - 页面内容
    /// * `code` - 正在搜索的番号
    /// * `category` - 本次搜索的分类，决定是否加标签
    pub fn extract(
        &self,
        final_url: &str,
        body: &str,
        code: &Code,
        category: SearchCategory,
    ) -> Result<Extraction, SourceError> {
        let site = origin(final_url).ok_or_else(|| {
            SourceError::Extraction(format!("final url has no origin: {}", final_url))
        })?;
        let tagging = category == self.tag_category;

        let results = match self.rule {
            ExtractionRule::Listing { item, url_prefix } => {
                let item = compile(item, &site, code)?;
                let prefix = url_prefix.map(|prefix| prefix.replace(ORIGIN_PLACEHOLDER, &site));
                item.captures_iter(body)
                    .filter_map(|caps| {
                        let url = caps.get(1)?.as_str();
                        let title = caps.get(2)?.as_str();
                        let context = caps.get(0)?.as_str();
                        let url = match &prefix {
                            Some(prefix) => format!("{}{}", prefix, url),
                            None => url.to_string(),
                        };
                        Some(self.build(url, title, context, tagging))
                    })
                    .take(MAX_RESULTS_PER_SOURCE)
                    .collect()
            }
            ExtractionRule::Scoped { container, item } => {
                let container = compile(container, &site, code)?;
                let item = compile(item, &site, code)?;
                container
                    .captures_iter(body)
                    .filter_map(|outer| {
                        let scope = outer.get(1)?.as_str();
                        let caps = item.captures(scope)?;
                        let url = caps.get(1)?.as_str().to_string();
                        let title = caps.get(2)?.as_str();
                        Some(self.build(url, title, scope, tagging))
                    })
                    .take(MAX_RESULTS_PER_SOURCE)
                    .collect()
            }
            ExtractionRule::FollowUp {
                only_if_url_contains,
                link,
                confirm_marker,
                title,
            } => {
                if !final_url.contains(only_if_url_contains) {
                    return Ok(Extraction::Results(Vec::new()));
                }
                let link = compile(link, &site, code)?;
                let Some(href) = link.captures(body).and_then(|caps| caps.get(1)) else {
                    return Ok(Extraction::Results(Vec::new()));
                };
                let base = Url::parse(final_url)
                    .map_err(|e| SourceError::Extraction(e.to_string()))?;
                let url = resolve_url(&base, href.as_str())
                    .map_err(|e| SourceError::Extraction(e.to_string()))?;

                return Ok(Extraction::FollowUp(PendingFetch {
                    url: url.to_string(),
                    confirm: confirm_marker.replace(CODE_PLACEHOLDER, code.as_str()),
                    title: title.replace(CODE_PLACEHOLDER, code.as_str()),
                }));
            }
        };

        Ok(Extraction::Results(results))
    }

    fn build(&self, url: String, raw_title: &str, context: &str, tagging: bool) -> SearchResult {
        let plain = html_escape::decode_html_entities(raw_title.trim()).into_owned();
        let mut title = plain.clone();

        if tagging {
            for trigger in &self.triggers {
                let haystack = match trigger.scope {
                    TagScope::Url => url.as_str(),
                    TagScope::Title => plain.as_str(),
                    TagScope::Container => context,
                };
                if trigger.needles.iter().any(|needle| haystack.contains(needle)) {
                    title = trigger.tag.prefix(&title);
                }
            }
        }

        SearchResult::new(title, url)
    }
}

fn render_pattern(template: &str, site: &str, code: &Code) -> String {
    template
        .replace(ORIGIN_PLACEHOLDER, &regex::escape(site))
        .replace(CODE_PLACEHOLDER, &regex::escape(code.as_str()))
}

/// 同一站点、同一番号的模式只编译一次
fn compile(template: &str, site: &str, code: &Code) -> Result<Regex, SourceError> {
    let pattern = render_pattern(template, site, code);

    if let Ok(mut cache) = PATTERN_CACHE.lock() {
        if let Some(regex) = cache.get(&pattern) {
            return Ok(regex.clone());
        }
    }

    let regex = Regex::new(&pattern).map_err(|e| SourceError::Extraction(e.to_string()))?;
    if let Ok(mut cache) = PATTERN_CACHE.lock() {
        cache.put(pattern, regex.clone());
    }
    Ok(regex)
}

/// 站点适配器表，按顺序匹配最终 URL
#[derive(Debug, Clone)]
pub struct AdapterTable {
    adapters: Vec<SourceAdapter>,
}

impl AdapterTable {
    pub fn new(adapters: Vec<SourceAdapter>) -> Self {
        Self { adapters }
    }

    /// 返回第一个标记出现在最终 URL 中的适配器
    pub fn select(&self, final_url: &str) -> Option<&SourceAdapter> {
        self.adapters
            .iter()
            .find(|adapter| final_url.contains(adapter.marker))
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// 内置站点规则
    pub fn builtin() -> Self {
        Self::new(vec![
            SourceAdapter::listing(
                "7mmtv.sx",
                r#"(?i)"({origin}/zh/[^/]+_content/[^/]*/[^"]*{code}[^"]*\.html)">([^<]*)</a>"#,
            )
            .with_trigger(ResultTag::Subtitled, TagScope::Url, &["chinese"])
            .with_trigger(ResultTag::Decensored, TagScope::Url, &["reducing"]),
            SourceAdapter::listing(
                "supjav.com",
                r#"(?i)"({origin}/zh/[0-9]+\.html)" title="([^"]*{code}[^"]*)""#,
            )
            .with_trigger(
                ResultTag::Decensored,
                TagScope::Title,
                &["无码破解", "无码流出", "無修正"],
            )
            .with_trigger(ResultTag::Subtitled, TagScope::Title, &["中文字幕"]),
            SourceAdapter {
                marker: "missav.ai",
                rule: ExtractionRule::Scoped {
                    container: r#"<div class="thumbnail group">([\s\S]+?)</div>\s*</div>"#,
                    item: r#"(?is)<a[^>]*href="([^"]*)"[^>]*>\s*<div class="my-2[^>]*>.*?<a[^>]*>([^<]*{code}[^<]*)</a>"#,
                },
                triggers: Vec::new(),
                tag_category: SearchCategory::Censored,
            }
            .with_trigger(ResultTag::Subtitled, TagScope::Container, &["中文字幕"])
            .with_trigger(ResultTag::Decensored, TagScope::Container, &["无码影片"]),
            SourceAdapter::listing(
                "jable.tv",
                r#"(?i)<a href="([^"]*)" title="([^"]*{code}[^"]*)">"#,
            ),
            SourceAdapter::listing(
                "jav.guru",
                r#"(?i)<a href="([^"]*{code}[^"]*)">\s*<img[^>]*alt="([^"]*)""#,
            ),
            SourceAdapter {
                marker: "123av.com",
                rule: ExtractionRule::Listing {
                    item: r#"(?i)<div class="detail">\s<a href="([^"]*{code}[^"]*)">([^<]*)</a>"#,
                    url_prefix: Some("{origin}/zh/"),
                },
                triggers: Vec::new(),
                tag_category: SearchCategory::Censored,
            },
            SourceAdapter {
                marker: "jav777.xyz",
                rule: ExtractionRule::FollowUp {
                    only_if_url_contains: "?s=",
                    link: r#"(?i)post-title"><a href="([^"]*)""#,
                    confirm_marker: "【番號】︰{code}",
                    title: "[中字] {code} (jav777)",
                },
                triggers: Vec::new(),
                tag_category: SearchCategory::Censored,
            },
        ])
    }
}

impl Default for AdapterTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "adapters_test.rs"]
mod tests;
