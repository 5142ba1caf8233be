use super::*;

fn signup_form(username: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Signup
// =============================================================

#[test]
fn valid_signup_builds_request_with_trimmed_fields() {
    let req = validate_signup(&signup_form(" ana ", " ana@example.com ", "Password1!", "Password1!")).unwrap();
    assert_eq!(req.name, "ana");
    assert_eq!(req.email, "ana@example.com");
    assert_eq!(req.password, "Password1!");
}

#[test]
fn signup_reports_each_failing_field() {
    let errors = validate_signup(&signup_form("a", "not-an-email", "short", "other")).unwrap_err();
    assert_eq!(errors.get(Field::Username), Some(USERNAME_TOO_SHORT));
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORDS_DIFFER));
}

#[test]
fn signup_rejects_long_username() {
    let long = "x".repeat(51);
    let errors = validate_signup(&signup_form(&long, "a@b.co", "Password1!", "Password1!")).unwrap_err();
    assert_eq!(errors.get(Field::Username), Some(USERNAME_TOO_LONG));
    assert_eq!(errors.get(Field::Email), None);
}

#[test]
fn signup_accepts_boundary_username_lengths() {
    assert!(validate_signup(&signup_form("ab", "a@b.co", "Password1!", "Password1!")).is_ok());
    assert!(validate_signup(&signup_form(&"x".repeat(50), "a@b.co", "Password1!", "Password1!")).is_ok());
}

// =============================================================
// Login
// =============================================================

#[test]
fn valid_login_builds_request() {
    let form = LoginForm { email: "ana@example.com".to_owned(), password: "Password1!".to_owned() };
    assert_eq!(
        validate_login(&form),
        Ok(LoginRequest { email: "ana@example.com".to_owned(), password: "Password1!".to_owned() })
    );
}

#[test]
fn login_requires_email_and_long_password() {
    let errors = validate_login(&LoginForm::default()).unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_shape_checks() {
    assert!(is_valid_email("ana@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.org"));
    for bad in ["", "ana", "@example.com", "ana@", "ana@example", "ana@@example.com", "ana@exa mple.com", "ana@.com"] {
        assert!(!is_valid_email(bad), "{bad:?}");
    }
}

#[test]
fn field_errors_keep_first_message_per_field() {
    let mut errors = FieldErrors::default();
    errors.push(Field::Email, INVALID_EMAIL);
    errors.push(Field::Email, "other");
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    assert!(!errors.is_empty());
}
