use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use admin_api::{build_router, cors_layer, AppState};
use admin_core::services::{CategoryService, ConfigService, MenuService, SecurityService, UpdateService};
use admin_infrastructure::{HttpVersionSource, LocalHostEnvironment, RuleTableOracle, SeededStores};
use admin_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes file output on exit
    let _log_guard = admin_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting (running version {})...", config.app.name, config.app.running_version);

    // Adapters
    let stores = SeededStores::from_settings(&config.seed).await?;
    let oracle = Arc::new(RuleTableOracle::from_settings(&config.permissions)?);
    info!("Loaded {} permission rules", oracle.len());

    let host = Arc::new(LocalHostEnvironment::new(config.host.clone(), config.app.is_development()));
    let version_source = Arc::new(HttpVersionSource::new(
        config.update.endpoint.clone(),
        Duration::from_secs(config.update.timeout_seconds),
        &config.app.running_version,
    )?);

    // Services
    let state = AppState {
        menu: Arc::new(MenuService::new(
            stores.categories.clone(),
            stores.modules.clone(),
            stores.config.clone(),
            oracle.clone(),
            host.clone(),
        )),
        categories: Arc::new(CategoryService::new(
            stores.categories.clone(),
            stores.config.clone(),
            oracle.clone(),
        )),
        config: Arc::new(ConfigService::new(
            stores.categories.clone(),
            stores.modules.clone(),
            stores.config.clone(),
            oracle,
        )),
        updates: Arc::new(UpdateService::new(
            stores.config.clone(),
            version_source,
            config.app.running_version.clone(),
        )),
        security: Arc::new(SecurityService::new(host, stores.config.clone())),
    };

    let app = build_router(state).layer(cors_layer(&config.app.allowed_origins)?);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
