use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::review::NewReview,
    state::AppState,
};

/// Handler for POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<NewReview>,
) -> Result<impl IntoResponse> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::BadRequest(
            "La note doit être comprise entre 1 et 5".into(),
        ));
    }

    let review = state.reviews.create(&payload).await?;
    Ok((StatusCode::OK, Json(review)))
}

/// Handler for GET /api/products/{productId}/reviews
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let reviews = state.reviews.get_by_product(product_id).await?;
    Ok((StatusCode::OK, Json(reviews)))
}

/// Handler for GET /api/products/{productId}/rating
pub async fn product_rating(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let rating = state.reviews.average_rating(product_id).await?;
    Ok((StatusCode::OK, Json(json!({ "rating": rating }))))
}
