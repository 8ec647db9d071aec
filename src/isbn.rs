//! The validated [`Isbn`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::debug;

use crate::area::LinguisticArea;
use crate::checksum::{OLD_LENGTH, is_valid, remove_hyphen, to_isbn13};
use crate::error::{Error, Result};

/// A validated ISBN, always held in its 13-digit form.
///
/// Instances can only be obtained through [`Isbn::of`] (or the `FromStr` /
/// `TryFrom` impls built on it), so every `Isbn` has passed the structural and
/// checksum checks. ISBN-10 input is upgraded with [`to_isbn13`].
///
/// Equality and hashing ignore hyphens:
///
/// ```
/// use isbnkit::Isbn;
///
/// let a = Isbn::of("978-4-8443-3667-9").unwrap();
/// let b = Isbn::of("9784844336679").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "978-4-8443-3667-9");
/// ```
#[derive(Debug, Clone)]
pub struct Isbn {
    original: String,
    normalized: String,
    parts: Option<Parts>,
}

/// The five hyphen-delimited elements of a canonically hyphenated ISBN-13.
#[derive(Debug, Clone)]
struct Parts {
    prefix: String,
    group: String,
    publisher: String,
    book_name: String,
    check_digit: String,
}

impl Isbn {
    /// Validate `number` and build an `Isbn` from it.
    ///
    /// A 13-digit number is stored as given, hyphens included. A 10-digit
    /// number is converted to ISBN-13 first, keeping its hyphen layout.
    /// Returns [`Error::InvalidIsbn`] if the number is not a valid ISBN.
    pub fn of(number: &str) -> Result<Self> {
        if !is_valid(number) {
            debug!(input = number, "rejected invalid ISBN");
            return Err(Error::InvalidIsbn(number.to_string()));
        }

        if remove_hyphen(number).len() == OLD_LENGTH {
            Ok(Self::new(to_isbn13(number)?))
        } else {
            Ok(Self::new(number.to_string()))
        }
    }

    /// Like [`Isbn::of`], for callers where the input may be absent.
    ///
    /// `None` is a caller bug and yields [`Error::MissingInput`], which is
    /// distinct from the [`Error::InvalidIsbn`] returned for bad numbers.
    pub fn of_nullable(number: Option<&str>) -> Result<Self> {
        number.ok_or(Error::MissingInput).and_then(Self::of)
    }

    fn new(original: String) -> Self {
        let normalized = remove_hyphen(&original);
        let segments: Vec<&str> = original.split('-').collect();
        let parts = match segments.as_slice() {
            [prefix, group, publisher, book_name, check_digit] => Some(Parts {
                prefix: prefix.to_string(),
                group: group.to_string(),
                publisher: publisher.to_string(),
                book_name: book_name.to_string(),
                check_digit: check_digit.to_string(),
            }),
            _ => None,
        };

        Self {
            original,
            normalized,
            parts,
        }
    }

    /// The ISBN as stored, e.g. `978-4-8443-3667-9` or `9784844336679`.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The 13 digits without hyphens.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether the ISBN is split into its five elements.
    pub fn is_hyphenated(&self) -> bool {
        self.parts.is_some()
    }

    /// GS1 prefix (`978` or `979`), or `""` if not hyphenated.
    pub fn prefix(&self) -> &str {
        self.part(|p| &p.prefix)
    }

    /// Registration group, or `""` if not hyphenated.
    pub fn group(&self) -> &str {
        self.part(|p| &p.group)
    }

    /// Registrant (publisher) element, or `""` if not hyphenated.
    pub fn publisher(&self) -> &str {
        self.part(|p| &p.publisher)
    }

    /// Publication element, or `""` if not hyphenated.
    pub fn book_name(&self) -> &str {
        self.part(|p| &p.book_name)
    }

    /// Check digit, or `""` if not hyphenated.
    pub fn check_digit(&self) -> &str {
        self.part(|p| &p.check_digit)
    }

    fn part<'a>(&'a self, field: impl FnOnce(&'a Parts) -> &'a String) -> &'a str {
        self.parts.as_ref().map(field).map_or("", String::as_str)
    }

    /// Classify the registration group.
    ///
    /// Only a hyphenated ISBN carries its group boundary, so an unhyphenated
    /// one is always [`LinguisticArea::Unknown`].
    pub fn linguistic_area(&self) -> LinguisticArea {
        let Some(parts) = &self.parts else {
            return LinguisticArea::Unknown;
        };

        match (parts.prefix.parse::<u64>(), parts.group.parse::<u64>()) {
            (Ok(prefix), Ok(group)) => LinguisticArea::classify(prefix, group),
            _ => LinguisticArea::Unknown,
        }
    }
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::of(s)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::of(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Isbn {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Isbn {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::of(&s).map_err(serde::de::Error::custom)
    }
}
