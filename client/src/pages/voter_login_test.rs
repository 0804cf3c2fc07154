use super::*;

#[test]
fn identity_fields_are_required() {
    assert_eq!(validate_identity(" ", "E1"), Err(IDENTITY_REQUIRED));
    assert_eq!(validate_identity("ada", ""), Err(IDENTITY_REQUIRED));
}

#[test]
fn identity_fields_are_trimmed() {
    assert_eq!(validate_identity(" ada ", " E1 "), Ok(("ada".to_owned(), "E1".to_owned())));
}
