// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 演员资料（actress）：单个资料来源的演员信息
/// - 番号（code）：从用户输入中提取的规范化番号
/// - 封面（cover）：模糊处理后的封面图片
/// - 回复（reply）：交给宿主渲染的消息片段
/// - 搜索结果（search_result）：站点适配器提取的标题与链接
///
/// 所有模型的生命周期都不超过一次请求。
pub mod actress;
pub mod code;
pub mod cover;
pub mod reply;
pub mod search_result;
