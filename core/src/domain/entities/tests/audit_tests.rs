//! Unit tests for audit events

use uuid::Uuid;

use crate::domain::entities::audit::{AuditEvent, AuditEventType};

#[test]
fn test_event_type_strings() {
    assert_eq!(AuditEventType::SignInFailure.as_str(), "SIGN_IN_FAILURE");
    assert_eq!(AuditEventType::Logout.to_string(), "LOGOUT");
}

#[test]
fn test_event_masks_email() {
    let user_id = Uuid::new_v4();
    let event = AuditEvent::new(AuditEventType::SignUp, true)
        .with_user(user_id)
        .with_email("alice@example.com")
        .with_detail("account created");

    assert_eq!(event.user_id, Some(user_id));
    assert_eq!(event.email_masked.as_deref(), Some("a***@example.com"));
    assert!(event.success);
}

#[test]
fn test_event_type_parse_matches_storage_form() {
    for ty in [
        AuditEventType::SignUp,
        AuditEventType::SignInSuccess,
        AuditEventType::SignInFailure,
        AuditEventType::Logout,
        AuditEventType::ProfileAccess,
    ] {
        assert_eq!(AuditEventType::parse(ty.as_str()), Some(ty));
    }
    assert_eq!(AuditEventType::parse("sign_up"), None);
}
