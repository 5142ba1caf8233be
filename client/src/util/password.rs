//! Password strength checklist for the signup form.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// One requirement of an acceptable password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Lowercase,
        PasswordRule::Uppercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    pub fn description(self) -> &'static str {
        match self {
            PasswordRule::MinLength => "At least 8 characters long",
            PasswordRule::Lowercase => "A lower case letter",
            PasswordRule::Uppercase => "An upper case letter",
            PasswordRule::Digit => "A number",
            PasswordRule::Special => "A special character (like !, $, %, or ?)",
        }
    }
}

/// Which rules a candidate password satisfies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordStrength {
    pub long_enough: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordStrength {
    /// Check `password` against every rule.
    ///
    /// Anything outside ASCII letters and digits counts as special.
    pub fn assess(password: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= MIN_PASSWORD_LEN,
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn satisfies(self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::MinLength => self.long_enough,
            PasswordRule::Lowercase => self.has_lower,
            PasswordRule::Uppercase => self.has_upper,
            PasswordRule::Digit => self.has_digit,
            PasswordRule::Special => self.has_special,
        }
    }

    /// All four character classes present, regardless of length.
    pub fn has_all_parts(self) -> bool {
        self.has_lower && self.has_upper && self.has_digit && self.has_special
    }

    pub fn is_good(self) -> bool {
        self.long_enough && self.has_all_parts()
    }

    /// Unmet rules, in checklist order.
    pub fn missing(self) -> Vec<PasswordRule> {
        PasswordRule::ALL.into_iter().filter(|rule| !self.satisfies(*rule)).collect()
    }

    /// Short verdict for the strength indicator.
    pub fn verdict(self) -> &'static str {
        if self.is_good() { "good" } else { "weak" }
    }
}
