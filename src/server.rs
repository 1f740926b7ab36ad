use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    planning::PlanningData,
    renderer::Renderer,
    signals::setup_signal_handlers,
};

/// Request bodies are a form field or one estimate
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Start the CSSD planner server
///
/// This function:
/// 1. Loads the planning table (falling back to the built-in one if allowed)
/// 2. Initializes metrics
/// 3. Sets up signal handlers for graceful shutdown and planning data reload
/// 4. Binds to the configured address and serves until shutdown
pub async fn start_server(config: Config) -> Result<()> {
    let planning = PlanningData::load_or_fallback(
        config.planning.data_file.as_deref(),
        config.planning.fallback_on_error,
    )?;

    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let state = AppState::new(planning, Renderer::new(config.display.currency_format()));

    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(state.planning.clone(), config.planning.clone())?;
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(&config, state.clone(), metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting CSSD planner on {}", addr);
    info!(
        "Planning table: {} area ranges, {} autoclave ranges",
        state.planning.load().areas.len(),
        state.planning.load().autoclaves.len()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let app_routes = Router::new()
        .route("/calculate", post(handlers::calculate::handle_calculate))
        .route("/render", post(handlers::render::handle_render))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(app_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route(
                &config.metrics.endpoint,
                get(handlers::metrics_handler::metrics),
            )
            .with_state(handle);
        router = router.merge(metrics_routes);
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
