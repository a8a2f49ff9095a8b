// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含与外部站点交互的具体实现，依赖领域层定义的特质：
/// - 演员资料来源（biography）：基于正则的资料页解析
/// - 封面（cover）：详情页封面提取、下载与模糊处理
/// - 站点搜索（search）：站点适配器表与并发爬虫
pub mod biography;
pub mod cover;
pub mod search;
