//! Input chain for credentials: guard, sanitize, normalize, validate.
//!
//! Each step is a plain function returning `Result<_, ValidationError>` and
//! the steps always run in that order. Passwords skip guard and sanitize so
//! their special characters survive untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use ag_shared::utils::sanitize::{contains_malicious_content, sanitize_str};

use crate::errors::ValidationError;

pub const EMAIL_MAX_LEN: usize = 100;
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

/// Specials a password must draw at least one character from
pub const PASSWORD_SPECIALS: &str = "@$!%*#?&";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

static NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("static name pattern"));

/// Raw sign-up fields as received
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Raw sign-in fields as received
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign-up fields that passed the whole chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignUp {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Sign-in fields that passed the whole chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignIn {
    pub email: String,
    pub password: String,
}

impl SignUpInput {
    pub fn prepare(self) -> Result<ValidSignUp, ValidationError> {
        guard("email", &self.email)?;
        guard("name", &self.name)?;

        let email = normalize_email(&sanitize_str(&self.email));
        let name = normalize_name(&sanitize_str(&self.name));

        validate_email(&email)?;
        validate_name(&name)?;
        validate_password(&self.password)?;

        Ok(ValidSignUp {
            email,
            name,
            password: self.password,
        })
    }
}

impl SignInInput {
    pub fn prepare(self) -> Result<ValidSignIn, ValidationError> {
        guard("email", &self.email)?;

        let email = normalize_email(&sanitize_str(&self.email));

        validate_email(&email)?;
        if self.password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            });
        }

        Ok(ValidSignIn {
            email,
            password: self.password,
        })
    }
}

/// Reject values carrying script or markup injection
pub fn guard(field: &str, value: &str) -> Result<(), ValidationError> {
    if contains_malicious_content(value) {
        return Err(ValidationError::MaliciousContent {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Lowercase and trim
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Collapse whitespace runs to one space and trim
pub fn normalize_name(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(ValidationError::LengthOutOfRange {
            field: "email".to_string(),
            min: 1,
            max: EMAIL_MAX_LEN,
        });
    }
    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::LengthOutOfRange {
            field: "name".to_string(),
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
        });
    }
    if !NAME_CHARS.is_match(name) {
        return Err(ValidationError::PatternMismatch {
            field: "name".to_string(),
            rule: "Name can only contain letters and spaces".to_string(),
        });
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        });
    }
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationError::LengthOutOfRange {
            field: "password".to_string(),
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }

    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special);

    if !(allowed && has_letter && has_digit && has_special) {
        return Err(ValidationError::PatternMismatch {
            field: "password".to_string(),
            rule: format!(
                "Password must contain at least one letter, one number and one of {}, and nothing else",
                PASSWORD_SPECIALS
            ),
        });
    }
    Ok(())
}
