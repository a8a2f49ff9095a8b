// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::actress::ActressInfo;
use crate::domain::models::reply::Reply;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// 身高达到阈值时使用的装饰前缀
pub const HEIGHT_HIGHLIGHT_PREFIX: &str = "🔥";

const MISSING_FIELD: &str = "-";

/// 演员资料来源特质
///
/// 实现方必须自行吞掉网络与解析错误，失败时返回 None
#[async_trait]
pub trait BiographySource: Send + Sync {
    async fn fetch(&self, name: &str) -> Option<ActressInfo>;

    fn name(&self) -> &str;
}

/// 演员资料查询服务
///
/// 并发请求所有来源，再按来源优先级逐字段合并
pub struct ActressService {
    sources: Vec<Arc<dyn BiographySource>>,
    height_highlight: u32,
}

impl ActressService {
    pub fn new(sources: Vec<Arc<dyn BiographySource>>, height_highlight: u32) -> Self {
        Self {
            sources,
            height_highlight,
        }
    }

    /// 查询演员资料
    ///
    /// # Returns
    ///
    /// * `Some(ActressInfo)` - 至少一个字段有值
    /// * `None` - 所有来源都没有提供任何字段
    pub async fn lookup(&self, name: &str) -> Option<ActressInfo> {
        let futures = self.sources.iter().map(|source| {
            let source = source.clone();
            async move {
                let info = source.fetch(name).await;
                debug!(
                    "Biography source {} returned {}",
                    source.name(),
                    if info.is_some() { "a record" } else { "nothing" }
                );
                info
            }
        });

        // join_all 保持来源顺序，合并优先级与完成先后无关
        let records = join_all(futures).await;
        merge(records)
    }

    /// 查询并渲染成一条文本回复
    pub async fn describe(&self, name: &str) -> Reply {
        let name = name.trim();
        if name.is_empty() {
            return Reply::text("Please enter a name to look up.");
        }

        match self.lookup(name).await {
            Some(info) => {
                info!("Found biography for {}", name);
                Reply::text(self.format_profile(name, &info))
            }
            None => Reply::text(format!("No information found for \"{}\".", name)),
        }
    }

    /// 渲染资料文本，缺失字段显示为 `-`
    pub fn format_profile(&self, name: &str, info: &ActressInfo) -> String {
        let height = info
            .height
            .as_deref()
            .map(|height| self.decorate_height(height));

        format!(
            "{}\nBorn: {}\nHeight: {}\nMeasurements: {}",
            name,
            info.year.as_deref().unwrap_or(MISSING_FIELD),
            height.as_deref().unwrap_or(MISSING_FIELD),
            info.measurements.as_deref().unwrap_or(MISSING_FIELD),
        )
    }

    /// 数值身高达到阈值时加上前缀，非数值原样返回
    pub fn decorate_height(&self, height: &str) -> String {
        match height.trim().parse::<f32>() {
            Ok(cm) if cm.is_finite() && cm >= self.height_highlight as f32 => {
                format!("{}{}", HEIGHT_HIGHLIGHT_PREFIX, height)
            }
            _ => height.to_string(),
        }
    }
}

/// 逐字段合并：每个字段取第一个有值的来源
///
/// 全部字段都缺失时返回 None；空字符串视为有值
pub fn merge<I>(records: I) -> Option<ActressInfo>
where
    I: IntoIterator<Item = Option<ActressInfo>>,
{
    let merged = records
        .into_iter()
        .flatten()
        .fold(ActressInfo::default(), |mut merged, record| {
            merged.fill_missing_from(&record);
            merged
        });

    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}
