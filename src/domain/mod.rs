// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：番号、搜索结果、演员资料与回复
/// - 搜索抽象（search）：站点请求模板、搜索模式与基础设施需要实现的特质
/// - 服务（services）：番号提取、结果聚合、搜索编排与演员资料查询
///
/// 领域层只依赖自身定义的特质，具体的网络访问由基础设施层提供。
pub mod models;
pub mod search;
pub mod services;
