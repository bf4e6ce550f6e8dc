//! Input validation functions
//!
//! This module provides validation utilities for user input. The backend
//! service layer calls these before touching storage so that bad input
//! surfaces as a validation error, never a constraint violation.

/// Validate username shape
///
/// 3-30 characters from `[A-Za-z0-9._-]`. The username doubles as the
/// login identifier, so whitespace and control characters are rejected.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 30 {
        return Err("Username must be at most 30 characters".to_string());
    }
    let username_regex = regex_lite::Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();
    if !username_regex.is_match(username) {
        return Err(
            "Username may only contain letters, digits, '.', '_' and '-'".to_string(),
        );
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("ramzan").is_ok());
        assert!(validate_username("ram.zan_99").is_ok());
        assert!(validate_username("a-b-c").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"x".repeat(31)).is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("tab\there").is_err());
        assert!(validate_username("émile").is_err());
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password(&"p".repeat(128)).is_ok());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn allowed_charset_usernames_validate(name in "[A-Za-z0-9._-]{3,30}") {
                prop_assert!(validate_username(&name).is_ok());
            }

            #[test]
            fn whitespace_in_username_rejected(
                prefix in "[A-Za-z0-9]{1,10}",
                suffix in "[A-Za-z0-9]{1,10}",
            ) {
                let name = format!("{} {}", prefix, suffix);
                prop_assert!(validate_username(&name).is_err());
            }
        }
    }
}
