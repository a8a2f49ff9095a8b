// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义站点请求模板、搜索分类与搜索模式，以及单个站点分支的错误类型
pub mod engine;
