mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, ApiInfoModifier};
use crate::features::classification::{
    routes as classification_routes, ClassificationService, UniformRandomClassifier,
};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::reports::{routes as reports_routes, ReportService};
use crate::features::viewport::{routes as viewport_routes, PlaneProjection, ViewportService};
use axum::extract::State;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn serve_openapi(
    State(openapi): State<utoipa::openapi::OpenApi>,
) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi)
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Initialize Report Service (the authoritative in-memory store)
    let report_service = Arc::new(ReportService::new());
    tracing::info!("Report service initialized");

    // Initialize Classification Service with the stand-in classifier
    let classification_service = Arc::new(ClassificationService::new(
        Arc::new(UniformRandomClassifier),
        config.classifier.latency,
    ));
    tracing::info!(
        "Classification service initialized (latency: {:?})",
        config.classifier.latency
    );

    // Initialize Viewport Service over the configured projection
    let projection = PlaneProjection::new(&config.map);
    let viewport_service = Arc::new(ViewportService::new(
        Arc::clone(&report_service),
        projection,
    ));
    tracing::info!(
        "Viewport service initialized (reference point: {}, {})",
        config.map.center_lat,
        config.map.center_lng
    );

    // Initialize Dashboard Service
    let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&report_service)));
    tracing::info!("Dashboard service initialized");

    // Build the OpenAPI document with info from config
    let info_modifier = ApiInfoModifier {
        title: config.api_docs.title.clone(),
        version: config.api_docs.version.clone(),
        description: config.api_docs.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    info_modifier.modify(&mut openapi);

    let api_docs = Router::new()
        .route("/api-docs/openapi.json", axum::routing::get(serve_openapi))
        .with_state(openapi);

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(api_docs)
        .merge(reports_routes::routes(Arc::clone(&report_service)))
        .merge(classification_routes::routes(Arc::clone(
            &classification_service,
        )))
        .merge(viewport_routes::routes(Arc::clone(&viewport_service)))
        .merge(dashboard_routes::routes(Arc::clone(&dashboard_service)))
        .merge(health_route)
        // Image payloads arrive base64-encoded in JSON bodies
        .layer(axum::extract::DefaultBodyLimit::max(
            config.app.max_request_body_size,
        ))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));

    axum::serve(listener, app).await?;

    Ok(())
}
