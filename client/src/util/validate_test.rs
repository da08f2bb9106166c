use super::*;

// =============================================================
// Password composition
// =============================================================

#[test]
fn accepts_a_compliant_password() {
    assert_eq!(validate_password("Abcdef1!"), Ok(()));
    assert_eq!(validate_password("Longer9$Password"), Ok(()));
}

#[test]
fn rejects_shorter_than_eight() {
    assert_eq!(validate_password("Ab1!xyz"), Err("Password must be at least 8 characters long"));
}

#[test]
fn rejects_longer_than_twenty() {
    assert_eq!(
        validate_password("Abcdefghijklmnopqr1!x"),
        Err("Password must be at most 20 characters long")
    );
}

#[test]
fn rejects_missing_digit() {
    assert_eq!(validate_password("Abcdefg!"), Err("Password must contain at least one number"));
}

#[test]
fn rejects_missing_special_character() {
    assert_eq!(
        validate_password("Abcdefg1"),
        Err("Password must contain at least one special character")
    );
}

#[test]
fn rejects_missing_uppercase() {
    assert_eq!(
        validate_password("abcdefg1!"),
        Err("Password must contain at least one uppercase letter")
    );
}

#[test]
fn rejects_missing_lowercase() {
    assert_eq!(
        validate_password("ABCDEFG1!"),
        Err("Password must contain at least one lowercase letter")
    );
}

#[test]
fn rejects_characters_outside_the_allowed_set() {
    assert_eq!(
        validate_password("Abcdef1! space"),
        Err("Password can only contain letters, numbers, and special characters")
    );
    assert_eq!(
        validate_password("Abcdef1!~"),
        Err("Password can only contain letters, numbers, and special characters")
    );
}

#[test]
fn each_listed_special_counts() {
    for special in PASSWORD_SPECIALS.chars() {
        let candidate = format!("Abcdef1{special}");
        assert_eq!(validate_password(&candidate), Ok(()), "special {special}");
    }
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn confirmation_must_match_exactly() {
    assert_eq!(validate_confirmation("Abcdef1!", "Abcdef1!"), Ok(()));
    assert_eq!(validate_confirmation("Abcdef1!", "Abcdef1?"), Err("Passwords do not match"));
}
