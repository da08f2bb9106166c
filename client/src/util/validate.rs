//! Registration input validation.
//!
//! Runs entirely client-side; a failing password never reaches the
//! registration endpoint. Rules and messages match the product's original
//! composition policy, checked in order with the first failure reported.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Special characters a password may (and must) draw from.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 20;

/// Check the password composition rules, reporting the first violation.
///
/// # Errors
///
/// Returns the user-facing message for the first failed rule.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_LEN {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err("Password must contain at least one special character");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c)) {
        return Err("Password can only contain letters, numbers, and special characters");
    }
    if password.chars().count() > MAX_LEN {
        return Err("Password must be at most 20 characters long");
    }
    Ok(())
}

/// Check the confirm-password field against the password.
///
/// # Errors
///
/// Returns a user-facing message when the fields differ.
pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm { Ok(()) } else { Err("Passwords do not match") }
}
