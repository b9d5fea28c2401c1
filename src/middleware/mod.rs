pub mod auth;
pub mod response;
pub mod validate;

pub use auth::CurrentUser;
pub use response::{ApiResponse, ApiResult};
