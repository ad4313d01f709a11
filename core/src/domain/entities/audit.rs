//! Audit events recorded for authentication activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ag_shared::utils::mask_email;

/// Event types for authentication auditing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    SignUp,
    SignInSuccess,
    SignInFailure,
    Logout,
    ProfileAccess,
}

impl AuditEventType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignUp => "SIGN_UP",
            Self::SignInSuccess => "SIGN_IN_SUCCESS",
            Self::SignInFailure => "SIGN_IN_FAILURE",
            Self::Logout => "LOGOUT",
            Self::ProfileAccess => "PROFILE_ACCESS",
        }
    }

    /// Parse the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SIGN_UP" => Some(Self::SignUp),
            "SIGN_IN_SUCCESS" => Some(Self::SignInSuccess),
            "SIGN_IN_FAILURE" => Some(Self::SignInFailure),
            "LOGOUT" => Some(Self::Logout),
            "PROFILE_ACCESS" => Some(Self::ProfileAccess),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub event_type: AuditEventType,
    pub user_id: Option<Uuid>,
    /// Masked form only, e.g. `a***@example.com`
    pub email_masked: Option<String>,
    pub success: bool,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(event_type: AuditEventType, success: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            user_id: None,
            email_masked: None,
            success,
            detail: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach the email, masked before it is stored
    pub fn with_email(mut self, email: &str) -> Self {
        self.email_masked = Some(mask_email(email));
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
