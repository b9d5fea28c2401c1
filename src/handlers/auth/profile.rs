use axum::extract::Extension;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, CurrentUser};

/// GET /api/auth/profile - return the principal resolved by the access guard.
pub async fn profile(Extension(CurrentUser(user)): Extension<CurrentUser>) -> ApiResponse<Value> {
    ApiResponse::success("Profile retrieved successfully", json!({ "user": user }))
}
