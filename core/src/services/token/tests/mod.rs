mod issuer_tests;

use uuid::Uuid;

use crate::domain::entities::user::UserProfile;

pub(super) const SECRET: &str = "unit-test-signing-secret-0123456789abcdef";

pub(super) fn alice() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
    }
}
