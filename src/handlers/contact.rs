use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    models::contact::{ContactUpdate, NewContact},
    state::AppState,
};

/// Handler for POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewContact>,
) -> Result<impl IntoResponse> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Erreur lors de la création du contact".into(),
        ));
    }

    let contact = state.contacts.create(&payload).await?;
    Ok((StatusCode::OK, Json(contact)))
}

/// Handler for GET /api/farmer/{farmerId}/contacts
pub async fn farmer_contacts(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let contacts = state.contacts.get_by_farmer(farmer_id).await?;
    Ok((StatusCode::OK, Json(contacts)))
}

/// Handler for PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ContactUpdate>,
) -> Result<impl IntoResponse> {
    let contact = state.contacts.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(contact)))
}
