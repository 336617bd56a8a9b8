use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::product::{NewProduct, ProductFilters, ProductUpdate, SaleMode},
    state::AppState,
};

/// Query parameters of the public product listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub province: Option<String>,
    pub search: Option<String>,
    pub sale_mode: Option<SaleMode>,
    pub approved: Option<String>,
}

/// Handler for GET /api/products
///
/// Defaults to active and approved listings; `approved=false` lifts the
/// approval filter so dashboards can show pending products too.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse> {
    let filters = ProductFilters {
        category: query.category,
        province: query.province,
        search: query.search,
        sale_mode: query.sale_mode,
        is_active: Some(true),
        is_approved: match query.approved.as_deref() {
            Some("false") => None,
            _ => Some(true),
        },
    };

    let products = state.products.get_all(&filters).await?;
    Ok((StatusCode::OK, Json(products)))
}

/// Handler for GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let product = state.products.get_by_id(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

/// Handler for POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<impl IntoResponse> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Erreur lors de la création du produit".into(),
        ));
    }
    if payload.price < 0.0 || payload.quantity < 0 {
        return Err(AppError::BadRequest(
            "Erreur lors de la création du produit".into(),
        ));
    }

    let product = state.products.create(&payload).await?;
    Ok((StatusCode::OK, Json(product)))
}

/// Handler for PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> Result<impl IntoResponse> {
    let current = state.products.get_by_id(id).await?;

    // The update must keep available stock within the total quantity
    let quantity = payload.quantity.unwrap_or(current.quantity);
    let available = payload
        .available_quantity
        .unwrap_or(current.available_quantity);
    if available > quantity {
        return Err(AppError::BadRequest(
            "La quantité disponible ne peut pas dépasser la quantité totale".into(),
        ));
    }

    let product = state.products.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(product)))
}

/// Handler for DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.products.delete(id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Produit supprimé avec succès" })),
    ))
}

/// Handler for GET /api/farmer/{farmerId}/products
pub async fn farmer_products(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let products = state.products.get_by_farmer(farmer_id).await?;
    Ok((StatusCode::OK, Json(products)))
}
