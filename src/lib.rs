//! # isbnkit
//!
//! Validation, normalization and conversion of International Standard Book
//! Numbers.
//!
//! ## Features
//!
//! - Validate ISBN-10 and ISBN-13, with or without hyphens
//! - Compute and verify check digits for both formats
//! - Convert ISBN-10 to ISBN-13, keeping the hyphen layout
//! - Classify the registration group into a [`LinguisticArea`]
//!
//! ## Quick Start
//!
//! ```
//! use isbnkit::{Isbn, LinguisticArea, is_valid, to_isbn13};
//!
//! assert!(is_valid("978-4-8443-3667-9"));
//! assert!(!is_valid("978-4-8443-3667-8"));
//!
//! assert_eq!(to_isbn13("4-10-109205-2").unwrap(), "978-4-10-109205-8");
//!
//! let isbn = Isbn::of("978-4-06-277829-9").unwrap();
//! assert_eq!(isbn.group(), "4");
//! assert_eq!(isbn.linguistic_area(), LinguisticArea::Japanese);
//! ```
//!
//! ## Errors
//!
//! Invalid user input surfaces as `false` from predicates and as
//! [`Error::InvalidIsbn`] from constructors and converters. Passing a checksum
//! helper digits that break its precondition, or passing no input at all to
//! [`Isbn::of_nullable`], is reported with a separate variant; see
//! [`Error::is_contract_violation`].

pub mod area;
pub mod checksum;
pub mod error;
pub mod isbn;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use area::LinguisticArea;
pub use checksum::{
    LENGTH, OLD_LENGTH, compute_isbn10_check_digit, compute_isbn13_check_digit, is_valid,
    is_valid_as_isbn10, is_valid_as_isbn13, remove_hyphen, to_isbn13,
};
pub use error::{Error, Result};
pub use isbn::Isbn;
