use super::*;

#[test]
fn strong_password_is_good() {
    let strength = PasswordStrength::assess("Password1!");
    assert!(strength.is_good());
    assert_eq!(strength.verdict(), "good");
    assert!(strength.missing().is_empty());
}

#[test]
fn lowercase_word_flags_missing_upper_digit_special() {
    let strength = PasswordStrength::assess("password");
    assert!(!strength.is_good());
    assert_eq!(strength.verdict(), "weak");
    assert_eq!(
        strength.missing(),
        vec![PasswordRule::Uppercase, PasswordRule::Digit, PasswordRule::Special]
    );
}

#[test]
fn short_password_with_all_parts_is_not_good() {
    let strength = PasswordStrength::assess("Pa1!");
    assert!(strength.has_all_parts());
    assert!(!strength.is_good());
    assert_eq!(strength.missing(), vec![PasswordRule::MinLength]);
}

#[test]
fn whitespace_and_unicode_count_as_special() {
    assert!(PasswordStrength::assess("a b").has_special);
    assert!(PasswordStrength::assess("café").has_special);
    assert!(!PasswordStrength::assess("abcXYZ123").has_special);
}

#[test]
fn empty_password_misses_everything() {
    assert_eq!(PasswordStrength::assess("").missing(), PasswordRule::ALL.to_vec());
}
