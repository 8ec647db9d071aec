//! Isbn API tests.
//!
//! Construction, validation, conversion and equality through the public API.

use isbnkit::{Error, Isbn, LinguisticArea, is_valid, is_valid_as_isbn10, is_valid_as_isbn13, to_isbn13};

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_of_hyphenated_isbn13() {
    let isbn = Isbn::of("978-4-8443-3667-9").unwrap();
    assert_eq!(isbn.to_string(), "978-4-8443-3667-9");
}

#[test]
fn test_of_bare_isbn13() {
    let isbn = Isbn::of("9784844336679").unwrap();
    assert_eq!(isbn.to_string(), "9784844336679");
}

#[test]
fn test_of_hyphenated_isbn10() {
    let isbn = Isbn::of("4-10-109205-2").unwrap();
    assert_eq!(isbn.as_str(), "978-4-10-109205-8");
}

#[test]
fn test_of_bare_isbn10() {
    let isbn = Isbn::of("4101092052").unwrap();
    assert_eq!(isbn.as_str(), "9784101092058");
}

#[test]
fn test_of_isbn10_matches_converted_form() {
    for isbn10 in ["4-10-109205-2", "4101092052", "0200000004"] {
        let converted = to_isbn13(isbn10).unwrap();
        let isbn = Isbn::of(isbn10).unwrap();
        assert_eq!(isbn.as_str(), converted);
        assert_eq!(isbn, Isbn::of(&converted).unwrap());
    }
}

#[test]
fn test_of_bad_checksum_is_invalid() {
    assert_eq!(
        Isbn::of("9784844336678"),
        Err(Error::InvalidIsbn("9784844336678".to_string()))
    );
    assert!(matches!(Isbn::of("978-4-8443-3667-8"), Err(Error::InvalidIsbn(_))));
}

#[test]
fn test_of_alphabet_is_invalid() {
    let err = Isbn::of("978-4-8443-3667-a").unwrap_err();
    assert!(matches!(err, Error::InvalidIsbn(_)));
    assert!(!err.is_contract_violation());
}

#[test]
fn test_of_absent_input_is_contract_violation() {
    let err = Isbn::of_nullable(None).unwrap_err();
    assert_eq!(err, Error::MissingInput);
    assert!(err.is_contract_violation());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_is_valid() {
    assert!(is_valid("978-4-8443-3667-9"));
    assert!(!is_valid("9784844336678"));
    assert!(!is_valid("978-4-8443-3667-8"));
    assert!(!is_valid("978-4-8443-3667-99"));
    assert!(!is_valid("978-4-8443-3667"));
    assert!(!is_valid(""));
}

#[test]
fn test_checksum_helpers() {
    assert_eq!(is_valid_as_isbn13("9784844336679"), Ok(true));
    assert_eq!(is_valid_as_isbn13("9784844336678"), Ok(false));
    assert_eq!(is_valid_as_isbn10("4101092052"), Ok(true));
    assert_eq!(is_valid_as_isbn10("4101092053"), Ok(false));
}

#[test]
fn test_to_isbn13() {
    assert_eq!(to_isbn13("4-10-109205-2").unwrap(), "978-4-10-109205-8");
    assert_eq!(to_isbn13("4101092052").unwrap(), "9784101092058");
}

// ============================================================================
// Equality Tests
// ============================================================================

#[test]
fn test_equality_ignores_hyphens() {
    let a = Isbn::of("978-4-8443-3667-9").unwrap();
    let b = Isbn::of("9784844336679").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_equality_identical() {
    let a = Isbn::of("978-4-8443-3667-9").unwrap();
    let b = Isbn::of("978-4-8443-3667-9").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_inequality() {
    assert_ne!(
        Isbn::of("978-4-8443-3667-9").unwrap(),
        Isbn::of("978-4-7741-5377-3").unwrap()
    );
    assert_ne!(
        Isbn::of("9784844336679").unwrap(),
        Isbn::of("9784774153773").unwrap()
    );
}

// ============================================================================
// Linguistic Area Tests
// ============================================================================

#[test]
fn test_linguistic_area_japanese() {
    let isbn = Isbn::of("978-4-06-277829-9").unwrap();
    assert_eq!(isbn.linguistic_area(), LinguisticArea::Japanese);

    let isbn = Isbn::of("978-4-621-06605-8").unwrap();
    assert_eq!(isbn.linguistic_area(), LinguisticArea::Japanese);
}

#[test]
fn test_linguistic_area_unhyphenated_is_unknown() {
    let isbn = Isbn::of("9784621066058").unwrap();
    assert_eq!(isbn.linguistic_area(), LinguisticArea::Unknown);
}

#[test]
fn test_linguistic_area_of_converted_isbn10() {
    // 0-306-40615-2 converts to 978-0-306-40615-7
    let isbn = Isbn::of("0-306-40615-2").unwrap();
    assert_eq!(isbn.as_str(), "978-0-306-40615-7");
    assert_eq!(isbn.linguistic_area(), LinguisticArea::English);
}
