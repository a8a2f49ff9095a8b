// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "info,codehound=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `LOG_FORMAT=json` 时输出结构化日志
fn json_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

/// 初始化全局 tracing 订阅者，只能在进程启动时调用一次
pub fn init_telemetry() {
    let format = std::env::var("LOG_FORMAT").ok();
    let registry = tracing_subscriber::registry().with(env_filter());

    if json_requested(format.as_deref()) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
