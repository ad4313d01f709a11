//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{IssuedToken, UserProfile};

/// Returned after a successful sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Session token for the `Authorization: Bearer` header
    pub access_token: String,

    /// The authenticated user
    pub user: UserProfile,
}

impl AuthResponse {
    pub fn new(issued: IssuedToken, user: UserProfile) -> Self {
        Self {
            access_token: issued.token,
            user,
        }
    }
}
