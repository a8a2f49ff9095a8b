// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单个资料来源给出的演员信息
///
/// 每个字段都是可选的，空字符串也视为"有值"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActressInfo {
    /// 出生年份
    pub year: Option<String>,
    /// 身高（厘米）
    pub height: Option<String>,
    /// 三围
    pub measurements: Option<String>,
}

impl ActressInfo {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.height.is_none() && self.measurements.is_none()
    }

    /// 用 `other` 补齐本记录中缺失的字段，已有字段保持不变
    pub fn fill_missing_from(&mut self, other: &ActressInfo) {
        if self.year.is_none() {
            self.year = other.year.clone();
        }
        if self.height.is_none() {
            self.height = other.height.clone();
        }
        if self.measurements.is_none() {
            self.measurements = other.measurements.clone();
        }
    }
}
