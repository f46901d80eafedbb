//! Startup Planner HTTP server.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use startup_planner::adapters::http::{api_router, AppAdapters, AppState};
use startup_planner::adapters::{
    BigDataCloudConfig, BigDataCloudGeocoder, InMemoryActionGate, InMemoryWorkspaceStore,
    MarkdownPlanRenderer, StdRandomProvider, UnavailableClipboard, WorkspaceSweeper,
};
use startup_planner::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.as_str()));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn build_adapters(config: &AppConfig) -> Result<AppAdapters, Box<dyn Error>> {
    let geocoder = BigDataCloudGeocoder::new(
        BigDataCloudConfig::default()
            .with_base_url(config.geocoding.base_url.clone())
            .with_timeout(config.geocoding.timeout())
            .with_locality_language(config.geocoding.locality_language.clone()),
    )?;
    let random = StdRandomProvider::from_seed(config.randomness.seed);
    if random.is_deterministic() {
        info!(seed = ?config.randomness.seed, "Using seeded randomness");
    }

    Ok(AppAdapters {
        store: Arc::new(InMemoryWorkspaceStore::new()),
        gate: Arc::new(InMemoryActionGate::new()),
        random: Arc::new(random),
        geocoder: Arc::new(geocoder),
        clipboard: Arc::new(UnavailableClipboard),
        renderer: Arc::new(MarkdownPlanRenderer::new()),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let adapters = build_adapters(&config)?;
    let sweeper = WorkspaceSweeper::new(adapters.store.clone(), &config.storage);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let state = AppState::new(adapters, &config);
    let app = api_router(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "startup-planner listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    let _ = sweeper_task.await;
    info!("Server stopped");
    Ok(())
}
