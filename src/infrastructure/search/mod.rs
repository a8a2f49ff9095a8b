// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 站点搜索模块
///
/// 站点适配器表负责从页面中提取结果，爬虫负责并发请求与失败降级
pub mod adapters;
pub mod crawler;

pub use adapters::AdapterTable;
pub use crawler::Crawler;
