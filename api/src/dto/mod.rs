//! Request and response bodies

pub mod auth;

pub use ag_shared::errors::ErrorResponse;
pub use auth::{LogoutResponse, SignInRequest, SignUpRequest};
