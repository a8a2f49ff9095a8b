// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括封面图片处理、响应体解码、URL 解析与遥测初始化
pub mod image_processing;
pub mod telemetry;
pub mod text_encoding;
pub mod url_utils;
