//! Client-side form validation.
//!
//! Runs before any network call; a form with field errors never reaches
//! the backend. Messages are rendered per field, exactly as the entry
//! forms show them.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});

const MIN_PASSWORD_LEN: usize = 6;

/// One per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Login form: presence only, no format checks.
#[must_use]
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    errors
}

/// Signup form for a new-organization account.
#[must_use]
pub fn validate_signup(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    errors
}

/// Signup form for joining an existing organization.
#[must_use]
pub fn validate_join(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    invitation_code: &str,
) -> Vec<FieldError> {
    let mut errors = validate_signup(name, email, password);
    if confirm_password.is_empty() {
        errors.push(FieldError::new(
            "confirmPassword",
            "Please confirm your password",
        ));
    } else if password != confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords don't match"));
    }
    if invitation_code.trim().is_empty() {
        errors.push(FieldError::new(
            "invitationCode",
            "Invitation code is required",
        ));
    }
    errors
}

/// Organization creation form.
#[must_use]
pub fn validate_organization(organization_name: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if organization_name.trim().is_empty() {
        errors.push(FieldError::new(
            "organizationName",
            "Organization name is required",
        ));
    }
    errors
}
