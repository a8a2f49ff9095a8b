// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单条搜索结果
///
/// 由站点适配器从搜索结果页中提取，`url` 指向详情页
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// 标题是否带有指定标签（方括号标记或站点原始关键字均算）
    pub fn has_tag(&self, tag: ResultTag) -> bool {
        self.title.contains(tag.marker()) || self.title.contains(tag.keyword())
    }
}

/// 结果标签
///
/// 适配器在有码分类下根据站点特征为标题加上的方括号前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTag {
    /// 中文字幕
    Subtitled,
    /// 无码破解
    Decensored,
}

impl ResultTag {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Subtitled => "[中字]",
            Self::Decensored => "[破解]",
        }
    }

    /// 站点标题中常见的完整写法
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Subtitled => "中文字幕",
            Self::Decensored => "无码破解",
        }
    }

    pub fn prefix(self, title: &str) -> String {
        format!("{} {}", self.marker(), title)
    }
}
