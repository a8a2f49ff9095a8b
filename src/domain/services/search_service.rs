// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::code::Code;
use crate::domain::models::reply::Reply;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{CategorySearch, CoverSource, SearchCategory, SearchMode};
use crate::domain::services::code_normalizer::{normalize, NormalizeError};
use crate::domain::services::result_aggregator::ResultAggregator;
use std::sync::Arc;
use tracing::{debug, info};

/// 番号搜索服务
///
/// 串起整个流程：提取番号 → 按模式爬取 → 过滤排序 → 取代表结果 → 封面 → 组装回复。
/// 一次调用可能产生多条回复（状态行 + 最终消息）
pub struct SearchService<S, C> {
    searcher: Arc<S>,
    covers: Arc<C>,
    aggregator: ResultAggregator,
    mode: SearchMode,
    return_details: bool,
}

impl<S, C> SearchService<S, C>
where
    S: CategorySearch + 'static,
    C: CoverSource + 'static,
{
    pub fn new(
        searcher: Arc<S>,
        covers: Arc<C>,
        aggregator: ResultAggregator,
        mode: SearchMode,
        return_details: bool,
    ) -> Self {
        Self {
            searcher,
            covers,
            aggregator,
            mode,
            return_details,
        }
    }

    pub fn status_line(&self, code: &Code) -> String {
        format!("Searching for \"{}\" ({}) results...", code, self.mode)
    }

    /// 处理一次搜索命令
    pub async fn search(&self, keyword: &str) -> Vec<Reply> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return vec![Reply::text("Please enter a code to search.")];
        }

        let code = match normalize(keyword) {
            Ok(code) => code,
            Err(NormalizeError::NotFound) => {
                debug!("No code found in {:?}", keyword);
                return vec![Reply::text(format!(
                    "No valid code found in \"{}\".",
                    keyword
                ))];
            }
        };

        let mut replies = vec![Reply::text(self.status_line(&code))];

        let (censored, uncensored) = tokio::join!(
            self.search_if_enabled(&code, SearchCategory::Censored),
            self.search_if_enabled(&code, SearchCategory::Uncensored),
        );
        let results = self.aggregator.aggregate(censored, uncensored);
        info!("Aggregated {} results for {}", results.len(), code);

        match results.into_iter().next() {
            Some(main) => replies.push(self.final_reply(&code, &main).await),
            None => replies.push(fallback_reply(&code)),
        }
        replies
    }

    async fn search_if_enabled(&self, code: &Code, category: SearchCategory) -> Vec<SearchResult> {
        if !self.mode.includes(category) {
            return Vec::new();
        }
        self.searcher.search_category(code, category).await
    }

    async fn final_reply(&self, code: &Code, main: &SearchResult) -> Reply {
        let mut reply = Reply::default();

        if let Some(cover) = self.covers.resolve_cover(&main.url).await {
            reply.push_image(cover.base64);
        }
        if self.return_details {
            reply.push_text(format!("{}\n{}", main.title, main.url));
        }

        if reply.is_empty() {
            return Reply::text(format!(
                "No results for \"{}\", or nothing is configured to be returned.",
                code
            ));
        }
        reply
    }
}

/// 所有站点都没有结果时的兜底建议
pub fn fallback_reply(code: &Code) -> Reply {
    let mut reply = Reply::text("No engine found any results, you can try:\n");
    reply.push_text(format!(
        "Google search: https://www.google.com/search?q={}%20jav",
        code
    ));
    reply
}

#[cfg(test)]
#[path = "search_service_test.rs"]
mod tests;
