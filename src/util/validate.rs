//! Client-side field validation.
//!
//! Runs before any request is sent; failures render as inline field
//! messages and never reach the server. Each helper returns `None` when
//! the value is acceptable, or the message to display.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate an email address.
pub fn email_error(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required");
    }
    if !looks_like_email(value) {
        return Some("Invalid email format");
    }
    None
}

fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a password for login: presence and minimum length only.
pub fn password_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Password is required");
    }
    if value.chars().count() < 8 {
        return Some("Password must be at least 8 characters");
    }
    None
}

/// Validate a password for registration: login rules plus strength.
pub fn new_password_error(value: &str) -> Option<&'static str> {
    if let Some(message) = password_error(value) {
        return Some(message);
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some("Password must contain at least one letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    None
}

/// Validate the confirmation field against the chosen password.
pub fn confirm_password_error(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        return Some("Please confirm your password");
    }
    if password != confirm {
        return Some("Passwords must match");
    }
    None
}

/// Validate an idea title.
pub fn idea_title_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Required");
    }
    None
}

/// Validate an idea description.
pub fn idea_description_error(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Required");
    }
    if value.chars().count() < 10 {
        return Some("Too short");
    }
    None
}
