use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_required() {
    assert_eq!(email_error(""), Some("Email is required"));
    assert_eq!(email_error("   "), Some("Email is required"));
}

#[test]
fn email_format_rejections() {
    for bad in ["plainaddress", "a@b", "@example.com", "a b@example.com", "a@b@c.com", "user@domain.c"] {
        assert_eq!(email_error(bad), Some("Invalid email format"), "{bad}");
    }
}

#[test]
fn email_accepts_common_shapes() {
    assert_eq!(email_error("new@example.com"), None);
    assert_eq!(email_error("first.last@sub.example.org"), None);
    assert_eq!(email_error("  x@example.com  "), None);
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_required_and_length() {
    assert_eq!(password_error(""), Some("Password is required"));
    assert_eq!(password_error("short1"), Some("Password must be at least 8 characters"));
    assert_eq!(password_error("longenough"), None);
}

#[test]
fn new_password_strength_rules() {
    assert_eq!(
        new_password_error("12345678"),
        Some("Password must contain at least one letter")
    );
    assert_eq!(
        new_password_error("abcdefgh"),
        Some("Password must contain at least one number")
    );
    assert_eq!(new_password_error("Password123!"), None);
}

#[test]
fn confirm_password_rules() {
    assert_eq!(confirm_password_error("pw", ""), Some("Please confirm your password"));
    assert_eq!(confirm_password_error("Password123!", "Password123"), Some("Passwords must match"));
    assert_eq!(confirm_password_error("Password123!", "Password123!"), None);
}

// =============================================================
// Idea fields
// =============================================================

#[test]
fn idea_title_required() {
    assert_eq!(idea_title_error(""), Some("Required"));
    assert_eq!(idea_title_error("Faster onboarding"), None);
}

#[test]
fn idea_description_length() {
    assert_eq!(idea_description_error(""), Some("Required"));
    assert_eq!(idea_description_error("too short"), Some("Too short"));
    assert_eq!(idea_description_error("a description long enough to keep"), None);
}
