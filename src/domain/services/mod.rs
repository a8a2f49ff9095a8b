// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 演员资料服务（actress_service）：多来源并发查询与逐字段合并
/// - 番号提取（code_normalizer）：从任意文本中识别番号
/// - 结果聚合（result_aggregator）：屏蔽词过滤与标签排序
/// - 搜索服务（search_service）：编排一次完整的番号搜索
pub mod actress_service;
pub mod code_normalizer;
pub mod result_aggregator;
pub mod search_service;
