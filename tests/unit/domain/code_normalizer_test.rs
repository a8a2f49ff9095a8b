// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use codehound::domain::services::code_normalizer::{normalize, NormalizeError};

fn code(text: &str) -> Option<String> {
    normalize(text).ok().map(|code| code.to_string())
}

#[test]
fn test_codes_inside_chat_messages() {
    assert_eq!(code("番号 SSIS-001 有吗").as_deref(), Some("SSIS-001"));
    assert_eq!(code("求 ABP—123 谢谢").as_deref(), Some("ABP-123"));
    assert_eq!(code("carib 010120-001").as_deref(), Some("010120-001"));
    assert_eq!(code("FC2PPV 1234567").as_deref(), Some("1234567"));
}

#[test]
fn test_original_casing_is_kept() {
    assert_eq!(code("Ssis-001").as_deref(), Some("Ssis-001"));
}

#[test]
fn test_text_without_code() {
    assert_eq!(normalize("你好"), Err(NormalizeError::NotFound));
    assert_eq!(normalize("abc-1"), Err(NormalizeError::NotFound));
}
