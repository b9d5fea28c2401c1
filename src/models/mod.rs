pub mod user;

pub use user::{AuthResponse, SigninRequest, SignupRequest, User};
