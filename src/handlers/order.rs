use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    models::order::{NewOrder, OrderUpdate},
    state::AppState,
};

/// Handler for POST /api/orders
///
/// The total price is computed from the product's current unit price; the
/// stock check and decrement happen atomically in the store.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<impl IntoResponse> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "Erreur lors de la création de la commande".into(),
        ));
    }

    // Unknown product and short stock share the same response
    let product = match state.products.get_by_id(payload.product_id).await {
        Ok(product) => product,
        Err(AppError::NotFound(_)) => {
            return Err(AppError::BadRequest(
                "Quantité insuffisante disponible".into(),
            ));
        }
        Err(e) => return Err(e),
    };

    if product.available_quantity < payload.quantity {
        return Err(AppError::BadRequest(
            "Quantité insuffisante disponible".into(),
        ));
    }

    let order = state.orders.create(&payload, product.price).await?;
    Ok((StatusCode::OK, Json(order)))
}

/// Handler for GET /api/buyer/{buyerId}/orders
pub async fn buyer_orders(
    State(state): State<AppState>,
    Path(buyer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let orders = state.orders.get_by_buyer(buyer_id).await?;
    Ok((StatusCode::OK, Json(orders)))
}

/// Handler for GET /api/farmer/{farmerId}/orders
pub async fn farmer_orders(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let orders = state.orders.get_by_farmer(farmer_id).await?;
    Ok((StatusCode::OK, Json(orders)))
}

/// Handler for PUT /api/orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> Result<impl IntoResponse> {
    let order = state.orders.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(order)))
}
