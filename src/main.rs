// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use codehound::config::settings::Settings;
use codehound::domain::services::actress_service::ActressService;
use codehound::domain::services::result_aggregator::{RankingPolicy, ResultAggregator};
use codehound::domain::services::search_service::SearchService;
use codehound::engines::reqwest_engine::ReqwestEngine;
use codehound::engines::traits::HttpEngine;
use codehound::infrastructure::biography::RegexBiographySource;
use codehound::infrastructure::cover::CoverResolver;
use codehound::infrastructure::search::{AdapterTable, Crawler};
use codehound::presentation::routes;
use codehound::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting codehound...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. The one HTTP client shared by every component
    let engine: Arc<dyn HttpEngine> = Arc::new(ReqwestEngine::new(&settings.http)?);
    info!(
        "HTTP engine {} initialized (proxy: {})",
        engine.name(),
        settings.http.proxy_url().unwrap_or("none")
    );

    // 4. Initialize services
    let crawler = Arc::new(Crawler::new(
        engine.clone(),
        Arc::new(AdapterTable::builtin()),
        &settings.search,
        &settings.http,
    ));
    let covers = Arc::new(CoverResolver::new(
        engine.clone(),
        &settings.cover,
        &settings.http,
    ));
    let aggregator = ResultAggregator::new(
        settings.search.error_keywords.clone(),
        RankingPolicy {
            decensored_first: settings.search.mosaic_reduce_first,
        },
    );
    let search_service = Arc::new(SearchService::new(
        crawler,
        covers,
        aggregator,
        settings.search.search_mode,
        settings.search.return_details,
    ));

    let sources =
        RegexBiographySource::from_configs(&settings.actress.sources, engine.clone(), &settings.http);
    let actress_service = Arc::new(ActressService::new(
        sources,
        settings.actress.height_highlight,
    ));
    info!(
        "Services initialized: {} censored engines, {} uncensored engines, {} biography sources",
        settings.search.censored_engines.len(),
        settings.search.uncensored_engines.len(),
        settings.actress.sources.len()
    );

    // 5. Start HTTP server
    let app = routes::app(search_service, actress_service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
