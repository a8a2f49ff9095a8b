// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个入站命令对应一个处理器，只负责请求解码与回复编码
pub mod actress_handler;
pub mod search_handler;
