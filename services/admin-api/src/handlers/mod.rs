//! HTTP handlers

mod auth;
mod health;
mod orders;
mod products;
mod roles;
mod users;

pub use auth::{login, logout, register, update_info, update_password, user};
pub use health::{health, ready};
pub use orders::{chart, list_orders};
pub use products::{create_product, delete_product, get_product, list_products, update_product};
pub use roles::{get_role, list_roles};
pub use users::{create_user, delete_user, get_user, list_users, update_user};

use ambassador_auth_core::Principal;
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiResult;
use crate::session;
use crate::state::AppState;

/// Resolve the caller and require that its role grants `resource`
async fn require(state: &AppState, jar: &CookieJar, resource: &str) -> ApiResult<Principal> {
    Ok(state.auth.authorize(session::extract(jar), resource).await?)
}
