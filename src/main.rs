//! Bounce Kingdom Server - Party Rental Business Management
//!
//! REST API server for the rental catalog, bookings, reports and the
//! activity log.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounce_kingdom_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

/// Extra ports tried when the configured one is taken
const PORT_FALLBACK_ATTEMPTS: u16 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bounce_kingdom_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Bounce Kingdom Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    let host: std::net::IpAddr = server_host.parse().expect("Invalid host address");
    let (listener, port) = bind_with_fallback(host, server_port).await?;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        started_at: Instant::now(),
        port,
    };

    // Build router
    let app = create_router(state);

    tracing::info!("Server listening on http://{}:{}", host, port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured port, walking forward past ports already in use
async fn bind_with_fallback(host: std::net::IpAddr, port: u16) -> anyhow::Result<(TcpListener, u16)> {
    for attempt in 0..=PORT_FALLBACK_ATTEMPTS {
        let candidate = port + attempt;
        match TcpListener::bind(SocketAddr::new(host, candidate)).await {
            Ok(listener) => {
                if attempt > 0 {
                    tracing::warn!(
                        "Port {} in use, falling back to port {}",
                        port,
                        candidate
                    );
                }
                return Ok((listener, candidate));
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => continue,
            Err(e) => return Err(e.into()),
        }
    }
    anyhow::bail!(
        "Ports {}..={} are all in use",
        port,
        port + PORT_FALLBACK_ATTEMPTS
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Products
        .route("/products", get(api::products::list_products))
        .route("/products", post(api::products::create_product))
        .route(
            "/products/:id",
            get(api::products::get_product)
                .put(api::products::update_product)
                .delete(api::products::delete_product),
        )
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route(
            "/bookings/:id",
            get(api::bookings::get_booking)
                .put(api::bookings::update_booking)
                .delete(api::bookings::delete_booking),
        )
        // Reports
        .route("/reports", get(api::reports::list_reports))
        .route("/reports/revenue", get(api::reports::revenue_report))
        .route("/reports/bookings", get(api::reports::bookings_report))
        .route(
            "/reports/equipment-utilization",
            get(api::reports::equipment_utilization_report),
        )
        .route("/reports/generate", post(api::reports::generate_reports))
        // Activities
        .route("/activities", get(api::activities::list_activities))
        .route("/activities", post(api::activities::create_activity))
        .route("/activities/:id", get(api::activities::get_activity));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(api::health::health_check))
        .with_state(state)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
