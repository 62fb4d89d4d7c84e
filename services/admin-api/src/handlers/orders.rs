//! Order handlers

use ambassador_db::{paginate, OrderRepository};
use ambassador_types::{resource, DailySales, Order, Page, PageQuery};
use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use super::require;
use crate::error::ApiResult;
use crate::extractors::ApiQuery;
use crate::state::AppState;

/// GET /api/orders?page=
///
/// Each order carries its items
pub async fn list_orders(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Page<Order>>> {
    require(&state, &jar, resource::ORDERS).await?;

    let page = paginate(&state.repos.orders, query.page()).await?;
    Ok(Json(page))
}

/// GET /api/chart
///
/// Sales summed per day
pub async fn chart(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<Vec<DailySales>>> {
    require(&state, &jar, resource::ORDERS).await?;

    let sales = state.repos.orders.daily_sales().await?;
    Ok(Json(sales.into_iter().map(DailySales::from).collect()))
}
