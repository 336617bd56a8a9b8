use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    models::user::{LoginRequest, NewUser, UserDto},
    state::AppState,
};

/// Handler for POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse> {
    if payload.username.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::BadRequest("Erreur lors de l'inscription".into()));
    }

    // Reject duplicate email and username before writing anything
    if state.users.get_by_email(&payload.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "Un utilisateur avec cet email existe déjà".into(),
        ));
    }
    if state.users.get_by_username(&payload.username).await?.is_some() {
        return Err(AppError::BadRequest(
            "Un utilisateur avec ce nom d'utilisateur existe déjà".into(),
        ));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = state.users.create(&payload, &password_hash).await?;

    tracing::info!(user_id = user.id, "new user registered");

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Handler for POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let user = state
        .users
        .get_by_email(&payload.email)
        .await?
        .ok_or(AppError::Auth("Email ou mot de passe incorrect".into()))?;

    if !verify_password(&payload.password, &user.password) {
        return Err(AppError::Auth("Email ou mot de passe incorrect".into()));
    }

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Hash a password into a PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a clear-text password against a stored PHC string
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
