//! PersonName value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));

/// A first or last name.
///
/// Must be a single ASCII word of at least 3 letters starting with an
/// uppercase letter. There is no standalone `Deserialize`: a name is only
/// read as part of a [`Contact`](crate::Contact), which knows the field.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, PersonName};
///
/// let name = PersonName::new("Uday", Field::FirstName).unwrap();
/// assert_eq!(name.as_str(), "Uday");
/// assert!(PersonName::new("uday", Field::FirstName).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given field.
    ///
    /// `field` only labels the error; the rule is the same for first and
    /// last names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name does not match.
    pub fn new(name: impl Into<String>, field: Field) -> Result<Self, ValidationError> {
        let name = name.into();
        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PersonName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
