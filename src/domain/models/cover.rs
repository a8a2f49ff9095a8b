// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 处理完成的封面图片（base64 编码）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub base64: String,
}

impl CoverImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
        }
    }
}
