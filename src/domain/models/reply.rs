// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 消息片段
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    Text { text: String },
    /// base64 编码的图片数据
    Image { base64: String },
}

/// 一条回复消息，由有序的片段组成
///
/// 渲染方式（纯文本或图文混排）由宿主决定
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reply {
    pub parts: Vec<MessagePart>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![MessagePart::Text { text: text.into() }],
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.parts.push(MessagePart::Text { text: text.into() });
    }

    pub fn push_image(&mut self, base64: impl Into<String>) {
        self.parts.push(MessagePart::Image {
            base64: base64.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn has_image(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, MessagePart::Image { .. }))
    }

    /// 拼接所有文本片段
    pub fn plain_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                MessagePart::Text { text } => Some(text.as_str()),
                MessagePart::Image { .. } => None,
            })
            .collect()
    }
}
