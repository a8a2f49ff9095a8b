// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use codehound::config::settings::{CoverRuleEntry, Settings};
use codehound::domain::search::engine::{SearchMode, SourceSpec};
use codehound::engines::traits::HttpMethod;
use codehound::infrastructure::cover::CoverRule;
use std::path::Path;

/// 仓库自带的 config/default.toml 必须能被完整加载
#[test]
fn test_shipped_default_config_loads() {
    let settings = Settings::load_from(Path::new("config/default.toml")).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.search.search_mode, SearchMode::All);
    assert_eq!(settings.search.censored_engines.len(), 7);
    assert_eq!(settings.search.uncensored_engines.len(), 2);
    assert_eq!(settings.actress.sources.len(), 3);
    assert_eq!(settings.actress.height_highlight, 168);
}

#[test]
fn test_shipped_engines_parse() {
    let settings = Settings::load_from(Path::new("config/default.toml")).unwrap();

    let posts = settings
        .search
        .censored_engines
        .iter()
        .chain(&settings.search.uncensored_engines)
        .map(|raw| SourceSpec::parse(raw).unwrap())
        .filter(|spec| spec.method == HttpMethod::Post)
        .count();
    assert_eq!(posts, 2);
}

#[test]
fn test_shipped_cover_rules_compile() {
    let settings = Settings::load_from(Path::new("config/default.toml")).unwrap();

    let rules = CoverRule::compile_all(&settings.cover.cover_regexes);
    assert_eq!(rules.len(), settings.cover.cover_regexes.len());
    assert!(settings
        .cover
        .cover_regexes
        .iter()
        .all(|entry| matches!(entry, CoverRuleEntry::Inline(_))));
}
