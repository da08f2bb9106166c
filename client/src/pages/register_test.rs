use super::*;

// ============================================================================
// Field presence
// ============================================================================

#[test]
fn validate_register_input_requires_name_and_email() {
    assert_eq!(
        validate_register_input("", "a@b.com", "Passw0rd!", "Passw0rd!").err(),
        Some("Enter your name and email.")
    );
    assert_eq!(
        validate_register_input("Ada", "   ", "Passw0rd!", "Passw0rd!").err(),
        Some("Enter your name and email.")
    );
}

#[test]
fn validate_register_input_trims_name_and_email() {
    let input = validate_register_input("  Ada  ", " a@b.com ", "Passw0rd!", "Passw0rd!")
        .expect("valid input");
    assert_eq!(input.name, "Ada");
    assert_eq!(input.email, "a@b.com");
    assert_eq!(input.password, "Passw0rd!");
}

// ============================================================================
// Password rules run before any request is built
// ============================================================================

#[test]
fn validate_register_input_rejects_weak_password() {
    assert_eq!(
        validate_register_input("Ada", "a@b.com", "short1!", "short1!").err(),
        Some("Password must be at least 8 characters long")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input("Ada", "a@b.com", "Passw0rd!", "Other0rd!").err(),
        Some("Passwords do not match")
    );
}
