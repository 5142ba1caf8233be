//! Form field validation shared by the signup and login pages.
//!
//! Validation runs before any network call; failures are reported per field
//! so each input can show its own message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{LoginRequest, SignupRequest};
use crate::util::password::MIN_PASSWORD_LEN;

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 2 characters.";
pub const USERNAME_TOO_LONG: &str = "Username must not exceed 50 characters.";
pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORDS_DIFFER: &str = "The passwords did not match";

const USERNAME_MIN: usize = 2;
const USERNAME_MAX: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: &'static str) {
        if self.get(field).is_none() {
            self.errors.push((field, message));
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Raw signup form input.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw login form input.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validate the signup form into a request body.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    let username = form.username.trim();
    let username_len = username.chars().count();
    if username_len < USERNAME_MIN {
        errors.push(Field::Username, USERNAME_TOO_SHORT);
    } else if username_len > USERNAME_MAX {
        errors.push(Field::Username, USERNAME_TOO_LONG);
    }
    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.push(Field::Email, INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(Field::Password, PASSWORD_TOO_SHORT);
    }
    if form.confirm_password != form.password {
        errors.push(Field::ConfirmPassword, PASSWORDS_DIFFER);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignupRequest {
        name: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

/// Validate the login form into a request body.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.push(Field::Email, INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(Field::Password, PASSWORD_TOO_SHORT);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: form.password.clone() })
}

/// Structural email check: one `@`, non-empty local part, dotted domain, no
/// whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
