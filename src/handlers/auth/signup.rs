use axum::extract::{Extension, State};
use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{AuthResponse, SignupRequest, User};
use crate::state::AppState;

/// POST /api/auth/signup - register a new account.
///
/// The duplicate-email check here is best effort and not atomic with the
/// insert; the store's unique email index catches the race and surfaces as
/// the same client error.
pub async fn signup(
    State(state): State<AppState>,
    Extension(req): Extension<SignupRequest>,
) -> ApiResult<AuthResponse> {
    if state.store.find_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::bad_request("User already exists with this email"));
    }

    let password_hash = state.passwords.hash(&req.password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal_server_error("Error hashing password")
    })?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: req.email,
        password_hash,
        name: req.name,
        created_at: now,
        updated_at: now,
    };

    // Persist before issuing: a token must never reference an unrecorded user.
    state.store.insert_user(&user).await?;

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("token issuance failed: {}", e);
        ApiError::internal_server_error("Error generating token")
    })?;

    tracing::info!(user_id = %user.id, "registered new user");

    Ok(ApiResponse::created(
        "User registered successfully",
        AuthResponse { user, token },
    ))
}
