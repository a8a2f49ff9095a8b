// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// 从 `Content-Type` 中取出 charset 参数
pub fn charset_of(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(|c: char| c == '"' || c == '\''))
        } else {
            None
        }
    })
}

/// 把响应体解码为 UTF-8 文本
///
/// 优先使用声明的 charset；未声明或无法识别时，合法的 UTF-8 直接返回，
/// 否则交给 chardetng 猜测编码
pub fn decode_body(bytes: &[u8], content_type: &str) -> String {
    let declared = charset_of(content_type).and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = declared {
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            debug!("Body had malformed {} sequences", encoding.name());
        }
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    debug!("Detected body encoding {}", encoding.name());
    encoding.decode(bytes).0.into_owned()
}
