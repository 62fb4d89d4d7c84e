//! Product handlers

use ambassador_db::{paginate, CreateProduct, ProductRepository, UpdateProduct};
use ambassador_types::{resource, Page, PageQuery, Product, ProductRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use super::require;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// GET /api/products?page=
pub async fn list_products(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Page<Product>>> {
    require(&state, &jar, resource::PRODUCTS).await?;

    let page = paginate(&state.repos.products, query.page()).await?;
    Ok(Json(page.map(Product::from)))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ApiResult<Json<Product>> {
    require(&state, &jar, resource::PRODUCTS).await?;

    let new = req.validate_new()?;
    let created = state
        .repos
        .products
        .create(CreateProduct {
            title: new.title,
            description: new.description,
            image: new.image,
            price: new.price,
        })
        .await?;

    Ok(Json(created.into()))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Product>> {
    require(&state, &jar, resource::PRODUCTS).await?;

    let product = state
        .repos
        .products
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("product"))?;

    Ok(Json(product.into()))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ApiResult<Json<Product>> {
    require(&state, &jar, resource::PRODUCTS).await?;

    let req = req.validate_update()?;
    let updated = state
        .repos
        .products
        .update(
            id,
            UpdateProduct {
                title: req.title,
                description: req.description,
                image: req.image,
                price: req.price,
            },
        )
        .await?
        .ok_or(ApiError::NotFound("product"))?;

    Ok(Json(updated.into()))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    require(&state, &jar, resource::PRODUCTS).await?;

    if !state.repos.products.delete(id).await? {
        return Err(ApiError::NotFound("product"));
    }

    Ok(StatusCode::NO_CONTENT)
}
