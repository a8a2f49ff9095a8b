// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{ResultTag, SearchResult};
use tracing::debug;

/// 有码结果的排序策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingPolicy {
    /// 为 true 时"破解"优先于"中字"
    pub decensored_first: bool,
}

impl RankingPolicy {
    /// 按优先级排列的两个标签
    pub fn priorities(self) -> [ResultTag; 2] {
        if self.decensored_first {
            [ResultTag::Decensored, ResultTag::Subtitled]
        } else {
            [ResultTag::Subtitled, ResultTag::Decensored]
        }
    }
}

/// 结果聚合器
///
/// 负责过滤屏蔽关键字、对有码结果做稳定排序，并把两类结果拼接起来
#[derive(Debug, Clone, Default)]
pub struct ResultAggregator {
    blocked: Vec<String>,
    policy: RankingPolicy,
}

impl ResultAggregator {
    /// 创建聚合器，空字符串关键字会被忽略
    pub fn new(blocked: Vec<String>, policy: RankingPolicy) -> Self {
        let blocked = blocked
            .into_iter()
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { blocked, policy }
    }

    /// 丢弃标题中含有任一屏蔽关键字的结果（区分大小写）
    pub fn filter(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        if self.blocked.is_empty() {
            return results;
        }

        let before = results.len();
        let kept: Vec<SearchResult> = results
            .into_iter()
            .filter(|result| {
                !self
                    .blocked
                    .iter()
                    .any(|keyword| result.title.contains(keyword.as_str()))
            })
            .collect();

        if kept.len() != before {
            debug!("Filtered {} blocked results", before - kept.len());
        }
        kept
    }

    /// 稳定排序：先看是否缺少第一优先级标签，再看第二优先级标签
    pub fn rank_censored(&self, mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        let [first, second] = self.policy.priorities();
        // sort_by_key 是稳定排序，同键结果保持原有顺序
        results.sort_by_key(|result| (!result.has_tag(first), !result.has_tag(second)));
        results
    }

    /// 过滤、排序并拼接（有码在前），结果可能为空
    pub fn aggregate(
        &self,
        censored: Vec<SearchResult>,
        uncensored: Vec<SearchResult>,
    ) -> Vec<SearchResult> {
        let mut merged = self.rank_censored(self.filter(censored));
        merged.extend(self.filter(uncensored));
        merged
    }
}
