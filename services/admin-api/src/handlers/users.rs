//! User administration handlers

use ambassador_db::{paginate, UserRepository};
use ambassador_types::{resource, CreateUserRequest, Page, PageQuery, UpdateProfileRequest, User, UserId};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use super::require;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// GET /api/users?page=
pub async fn list_users(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Page<User>>> {
    require(&state, &jar, resource::USERS).await?;

    let page = paginate(&state.repos.users, query.page()).await?;
    Ok(Json(page.map(User::from)))
}

/// POST /api/users
///
/// The new account starts with the configured initial password
pub async fn create_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> ApiResult<Json<User>> {
    require(&state, &jar, resource::USERS).await?;

    let created = state.auth.create_user(req).await?;
    Ok(Json(created.into()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<User>> {
    require(&state, &jar, resource::USERS).await?;

    let user = state
        .repos
        .users
        .find_with_role(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<User>> {
    require(&state, &jar, resource::USERS).await?;

    let updated = state.auth.update_user(UserId(id), req).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    let caller = require(&state, &jar, resource::USERS).await?;

    if !state.repos.users.delete(id).await? {
        return Err(ApiError::NotFound("user"));
    }

    tracing::info!(user_id = id, deleted_by = %caller.user_id(), "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
