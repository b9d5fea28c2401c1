use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;

/// The authenticated principal resolved from a bearer token, attached to the
/// request for downstream handlers.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Access guard for protected routes. Terminal outcomes, mutually exclusive
/// and checked in order:
///
/// 1. missing/malformed/empty Authorization header -> 401
/// 2. token fails signature or expiry checks      -> 401
/// 3. token subject is not a user id              -> 401
/// 4. user no longer exists in the store          -> 404
/// 5. user found -> attach [`CurrentUser`] and continue
///
/// Performs exactly one store lookup per request; nothing is cached across
/// requests.
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Not authorized to access this route"))?;

    let claims = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    let user_id =
        Uuid::parse_str(&claims.sub).map_err(|_| ApiError::unauthorized("Invalid user ID"))?;

    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(%user_id, "token subject no longer exists");
            ApiError::not_found("User not found")
        })?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
