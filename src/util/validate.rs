//! # Field Validation
//!
//! Regex-based validators for form fields, with typed rejection reasons.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]{3,39}$").expect("valid username pattern"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email pattern")
});

/// Why a field value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    #[error("{0} is required")]
    Required(&'static str),

    /// Username length or charset violation.
    #[error("username must be 3-39 characters: lowercase letters, numbers, and hyphens")]
    UsernameFormat,

    /// Username hyphen placement violation.
    #[error("username cannot start or end with a hyphen, or contain consecutive hyphens")]
    UsernameHyphens,

    /// Not a plausible email address.
    #[error("enter a valid email address")]
    EmailFormat,
}

/// Validates a username: 3-39 chars of `[a-z0-9-]`, no leading, trailing,
/// or consecutive hyphens.
pub fn username(input: &str) -> Result<(), FieldError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(FieldError::Required("username"));
    }

    if !USERNAME_RE.is_match(input) {
        return Err(FieldError::UsernameFormat);
    }

    if input.starts_with('-') || input.ends_with('-') || input.contains("--") {
        return Err(FieldError::UsernameHyphens);
    }

    Ok(())
}

/// Validates an email address shape. Not an RFC parser; rejects the obvious.
pub fn email(input: &str) -> Result<(), FieldError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(FieldError::Required("email"));
    }

    if !EMAIL_RE.is_match(input) {
        return Err(FieldError::EmailFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_plain() {
        assert_eq!(username("alice"), Ok(()));
        assert_eq!(username("a-1b"), Ok(()));
        assert_eq!(username("abc"), Ok(()));
    }

    #[test]
    fn test_username_trims_whitespace() {
        assert_eq!(username("  alice  "), Ok(()));
    }

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(username(""), Err(FieldError::Required("username")));
        assert_eq!(username("   "), Err(FieldError::Required("username")));
    }

    #[test]
    fn test_username_rejects_bad_length() {
        assert_eq!(username("ab"), Err(FieldError::UsernameFormat));
        assert_eq!(username(&"a".repeat(40)), Err(FieldError::UsernameFormat));
    }

    #[test]
    fn test_username_rejects_bad_charset() {
        assert_eq!(username("Alice"), Err(FieldError::UsernameFormat));
        assert_eq!(username("al ice"), Err(FieldError::UsernameFormat));
        assert_eq!(username("al.ice"), Err(FieldError::UsernameFormat));
    }

    #[test]
    fn test_username_rejects_hyphen_placement() {
        assert_eq!(username("-alice"), Err(FieldError::UsernameHyphens));
        assert_eq!(username("alice-"), Err(FieldError::UsernameHyphens));
        assert_eq!(username("al--ice"), Err(FieldError::UsernameHyphens));
    }

    #[test]
    fn test_email_accepts_plain() {
        assert_eq!(email("a@b.co"), Ok(()));
        assert_eq!(email("first.last+tag@sub.example.org"), Ok(()));
    }

    #[test]
    fn test_email_rejects_empty() {
        assert_eq!(email(""), Err(FieldError::Required("email")));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(email("nope"), Err(FieldError::EmailFormat));
        assert_eq!(email("a@b"), Err(FieldError::EmailFormat));
        assert_eq!(email("a b@c.dd"), Err(FieldError::EmailFormat));
        assert_eq!(email("@c.dd"), Err(FieldError::EmailFormat));
    }
}
