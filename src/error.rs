//! Error types for isbnkit operations.

use thiserror::Error;

/// Errors that can occur while validating or converting an ISBN.
///
/// Two kinds are kept apart. [`Error::InvalidIsbn`] is an expected outcome for
/// user-supplied input that is not a valid ISBN. The remaining variants are
/// contract violations: the caller handed a helper something its documented
/// precondition rules out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid ISBN: {0}")]
    InvalidIsbn(String),

    #[error("missing input: an ISBN string is required")]
    MissingInput,

    #[error("malformed digits: expected {expected}, found {found:?}")]
    MalformedDigits {
        expected: &'static str,
        found: String,
    },
}

impl Error {
    /// Whether this error reports a misuse of the API rather than a bad ISBN.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::MissingInput | Error::MalformedDigits { .. })
    }

    pub(crate) fn malformed(expected: &'static str, found: &[u8]) -> Self {
        Error::MalformedDigits {
            expected,
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
