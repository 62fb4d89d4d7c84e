//! Role handlers

use ambassador_db::RoleRepository;
use ambassador_types::{resource, Role};
use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use super::require;
use crate::error::{ApiError, ApiResult};
use crate::extractors::ApiPath;
use crate::state::AppState;

/// GET /api/roles
pub async fn list_roles(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<Vec<Role>>> {
    require(&state, &jar, resource::ROLES).await?;

    let roles = state.repos.roles.list().await?;
    Ok(Json(roles.into_iter().map(Role::from).collect()))
}

/// GET /api/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Role>> {
    require(&state, &jar, resource::ROLES).await?;

    let role = state
        .repos
        .roles
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("role"))?;

    Ok(Json(role.into()))
}
