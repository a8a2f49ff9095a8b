// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 定义请求与回复的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含番号提取、结果聚合、搜索编排与演员资料合并
pub mod domain;

/// 引擎模块
///
/// 进程内共享的 HTTP 客户端
pub mod engines;

/// 基础设施模块
///
/// 站点适配器、并发爬虫、封面解析与演员资料来源
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
