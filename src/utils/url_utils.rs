// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 提取 `host[:port]`，无法解析或没有主机时返回 None
pub fn authority(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// 提取 `scheme://host[:port]`
pub fn origin(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    url.has_host().then(|| url.origin().ascii_serialization())
}
