//! Authentication handlers (register, login, logout, own profile)

use ambassador_types::{
    LoginRequest, MessageResponse, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest,
    User,
};
use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AuthUser};
use crate::session;
use crate::state::AppState;

/// POST /api/register
///
/// Create an account with the default role and sign it in
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Json<User>)> {
    let signed_in = state.auth.register(req).await?;
    let jar = session::attach(jar, &signed_in.token)?;

    Ok((jar, Json(signed_in.user.into())))
}

/// POST /api/login
///
/// Exchange credentials for a session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let signed_in = state.auth.login(req).await?;
    let jar = session::attach(jar, &signed_in.token)?;

    Ok((jar, Json(MessageResponse::success())))
}

/// GET /api/user
pub async fn user(AuthUser(principal): AuthUser) -> Json<User> {
    Json(principal.to_user())
}

/// POST /api/logout
///
/// Sessions are stateless; logging out only drops the cookie
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (session::clear(jar), Json(MessageResponse::success()))
}

/// PUT /api/users/info
///
/// Update the caller's own name and email
pub async fn update_info(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<User>> {
    let updated = state.auth.update_info(principal.user_id(), req).await?;
    Ok(Json(updated.into()))
}

/// PUT /api/users/password
pub async fn update_password(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ApiJson(req): ApiJson<UpdatePasswordRequest>,
) -> ApiResult<Json<User>> {
    state.auth.update_password(principal.user_id(), req).await?;
    Ok(Json(principal.to_user()))
}
