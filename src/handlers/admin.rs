use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::Result,
    models::product::ProductFilters,
    models::user::UserDto,
    state::AppState,
};

/// Handler for GET /api/admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.get_all().await?;
    let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Handler for GET /api/admin/products
///
/// The moderation queue: active products whatever their approval state.
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let filters = ProductFilters {
        is_active: Some(true),
        ..Default::default()
    };
    let products = state.products.get_all(&filters).await?;
    Ok((StatusCode::OK, Json(products)))
}

/// Handler for PUT /api/admin/products/{id}/approve
pub async fn approve_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let product = state.products.approve(id).await?;
    tracing::info!(product_id = id, "product approved");
    Ok((StatusCode::OK, Json(product)))
}
