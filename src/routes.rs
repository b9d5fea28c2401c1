use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::handlers::auth;
use crate::middleware::{auth::require_auth, validate};
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth_routes(state.clone()))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Signup and signin pass through the request validator; profile is gated by
/// the access guard.
fn auth_routes(state: AppState) -> Router<AppState> {
    let signup = Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route_layer(middleware::from_fn(validate::validate_signup));

    let signin = Router::new()
        .route("/api/auth/signin", post(auth::signin))
        .route_layer(middleware::from_fn(validate::validate_signin));

    let profile = Router::new()
        .route("/api/auth/profile", get(auth::profile))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    signup.merge(signin).merge(profile)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "status": "OK",
        "message": "Server is running"
    }))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
