// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单元测试
///
/// 通过公共 API 验证配置文件与领域服务
pub mod config;
pub mod domain;
