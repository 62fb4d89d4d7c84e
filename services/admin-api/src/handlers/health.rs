//! Liveness and readiness

use ambassador_db::RoleRepository;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
}

/// Readiness report; `roles` is the number of seeded roles the gate can resolve
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub roles: usize,
    pub connections: u32,
    pub idle_connections: usize,
}

/// GET /health
pub async fn health() -> Json<Liveness> {
    Json(Liveness { status: "healthy" })
}

/// GET /ready
///
/// Ready once storage answers and at least one role exists; without roles
/// no session can pass the authorization gate.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (status, roles) = match state.repos.roles.list().await {
        Ok(roles) if !roles.is_empty() => (StatusCode::OK, roles.len()),
        Ok(_) => {
            tracing::warn!("Not ready: no roles seeded");
            (StatusCode::SERVICE_UNAVAILABLE, 0)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Not ready: storage unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, 0)
        }
    };

    let report = Readiness {
        status: if status.is_success() { "ready" } else { "unavailable" },
        roles,
        connections: state.pool.size(),
        idle_connections: state.pool.num_idle(),
    };

    (status, Json(report))
}
