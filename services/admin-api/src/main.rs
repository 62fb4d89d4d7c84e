//! Ambassador Admin API
//!
//! REST backend for the e-commerce admin panel.
//!
//! ## Endpoints
//!
//! - `POST /api/register`, `POST /api/login`, `POST /api/logout` - Sessions
//! - `GET /api/user`, `PUT /api/users/info`, `PUT /api/users/password` - Own account
//! - `/api/users`, `/api/users/{id}` - User administration (`users`)
//! - `/api/roles`, `/api/roles/{id}` - Roles (`roles`)
//! - `/api/products`, `/api/products/{id}` - Products (`products`)
//! - `GET /api/orders`, `GET /api/chart` - Orders and daily sales (`orders`)
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness
//! - `GET /ready` - Readiness (storage reachable, roles seeded)

mod config;
mod error;
mod extractors;
mod handlers;
mod router;
mod session;
mod state;

use std::net::SocketAddr;

use ambassador_db::pg::Repositories;
use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::Router;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("admin_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ambassador Admin API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        http_port = config.http_port,
        session_hours = config.auth.session_duration.as_secs() / 3600,
        "Configuration loaded"
    );

    // Create database pool
    let pool = ambassador_db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Create repositories and application state
    let repos = Repositories::new(pool.clone());
    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(repos, pool, config);

    let app = build_router(state);

    if let Err(e) = run_http_server(app, http_addr).await {
        tracing::error!(error = ?e, "HTTP server error");
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn run_http_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let service: IntoMakeServiceWithConnectInfo<Router, SocketAddr> =
        app.into_make_service_with_connect_info();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
