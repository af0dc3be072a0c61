//! Input validation helpers shared by the domain services

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 4;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase regex is valid"));

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Password rule: at least four characters and one capital letter
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH && UPPERCASE_REGEX.is_match(password)
}

/// Check if a string's character count is within bounds (inclusive)
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    len >= min && len <= max
}

/// Detects an inline `<script` tag in user supplied text
pub fn contains_script_tag(value: &str) -> bool {
    value.to_ascii_lowercase().contains("<script")
}
