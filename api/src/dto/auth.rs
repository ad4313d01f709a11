use serde::{Deserialize, Serialize};

use ag_core::services::auth::{SignInInput, SignUpInput};

/// Body of `POST /api/auth/signup`
///
/// Absent fields decode as empty strings so the input chain reports them as
/// required, with the field name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignUpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

impl From<SignUpRequest> for SignUpInput {
    fn from(request: SignUpRequest) -> Self {
        SignUpInput {
            email: request.email,
            name: request.name,
            password: request.password,
        }
    }
}

/// Body of `POST /api/auth/signin`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<SignInRequest> for SignInInput {
    fn from(request: SignInRequest) -> Self {
        SignInInput {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
