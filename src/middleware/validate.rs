use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{SigninRequest, SignupRequest};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Validates signup payloads before any state is touched. All violated
/// fields are reported at once; on success the typed request is placed in
/// request extensions for the handler.
pub async fn validate_signup(request: Request, next: Next) -> Result<Response, ApiError> {
    let (payload, request) = parse_body::<SignupRequest>(request).await?;

    let errors = check_signup(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Validation failed", errors));
    }

    forward(request, payload, next).await
}

/// Signin counterpart: same email rule, password only required to be present.
pub async fn validate_signin(request: Request, next: Next) -> Result<Response, ApiError> {
    let (payload, request) = parse_body::<SigninRequest>(request).await?;

    let errors = check_signin(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation_error("Validation failed", errors));
    }

    forward(request, payload, next).await
}

async fn parse_body<T: DeserializeOwned>(request: Request) -> Result<(T, Request), ApiError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;

    let payload = serde_json::from_slice(&bytes)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;

    Ok((payload, Request::from_parts(parts, Body::from(bytes))))
}

async fn forward<T: Clone + Send + Sync + 'static>(
    mut request: Request,
    payload: T,
    next: Next,
) -> Result<Response, ApiError> {
    request.extensions_mut().insert(payload);
    Ok(next.run(request).await)
}

fn check_signup(req: &SignupRequest) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if req.email.is_empty() || !is_valid_email(&req.email) {
        errors.insert(
            "email".to_string(),
            "Please provide a valid email".to_string(),
        );
    }

    if req.password.len() < 6 {
        errors.insert(
            "password".to_string(),
            "Password must be at least 6 characters long".to_string(),
        );
    }

    if req.name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    errors
}

fn check_signin(req: &SigninRequest) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if req.email.is_empty() || !is_valid_email(&req.email) {
        errors.insert(
            "email".to_string(),
            "Please provide a valid email".to_string(),
        );
    }

    if req.password.is_empty() {
        errors.insert(
            "password".to_string(),
            "Password is required".to_string(),
        );
    }

    errors
}

// Deliberately permissive syntactic check, not an RFC validator.
fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
