// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::code::Code;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("No code found in input")]
    NotFound,
}

// The regex crate has no look-around: each rule wraps the code in capture group 1
// between consuming boundary groups, which yields the same span.
static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 123456-789
        r"(?i)(?:^|[^a-z0-9])([0-9]{5,}[_-][0-9]{2,5})(?:[^a-z0-9]|$)",
        // ABC-123, 1PON_012, HEYZO-1234
        r"(?i)(?:^|[^a-z0-9])((?:[0-9]*[a-z]+|[a-z]+[0-9]+[a-z]*)[_-][a-z]*[0-9]{2,5})(?:[^0-9]|$)",
        // ABC123
        r"(?i)(?:^|[^a-z0-9])([a-z]+[0-9]{3,})(?:[^a-z0-9]|$)",
        // 123456
        r"(?i)(?:^|[^a-z0-9])([0-9]{4,})(?:[^a-z0-9_-]|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("code pattern must compile"))
    .collect()
});

/// 从任意文本中提取番号
///
/// 先把全角破折号替换为连字符，再按优先级依次尝试四条规则，
/// 返回第一条命中规则的第一个匹配（保留原始大小写）
///
/// # Returns
///
/// * `Ok(Code)` - 提取到的番号
/// * `Err(NormalizeError::NotFound)` - 没有任何规则命中，调用方不应再发起网络请求
pub fn normalize(text: &str) -> Result<Code, NormalizeError> {
    let text = text.replace('—', "-");

    RULES
        .iter()
        .find_map(|rule| rule.captures(&text).and_then(|caps| caps.get(1)))
        .map(|found| Code::new(found.as_str()))
        .ok_or(NormalizeError::NotFound)
}
