use axum::extract::{Extension, State};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{AuthResponse, SigninRequest};
use crate::state::AppState;

/// POST /api/auth/signin - authenticate an existing account.
///
/// Unknown email and wrong password return the identical message so callers
/// cannot enumerate which factor failed.
pub async fn signin(
    State(state): State<AppState>,
    Extension(req): Extension<SigninRequest>,
) -> ApiResult<AuthResponse> {
    let Some(user) = state.store.find_user_by_email(&req.email).await? else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !state.passwords.verify(&user.password_hash, &req.password) {
        tracing::warn!(user_id = %user.id, "signin with wrong password");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("token issuance failed: {}", e);
        ApiError::internal_server_error("Error generating token")
    })?;

    tracing::info!(user_id = %user.id, "user signed in");

    Ok(ApiResponse::success(
        "Login successful",
        AuthResponse { user, token },
    ))
}
