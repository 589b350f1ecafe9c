//! AddressPart value object.

use super::errors::{Field, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters for an address, city or state.
pub const MIN_ADDRESS_PART_LEN: usize = 4;

/// A free-form piece of a postal address: street line, city or state.
///
/// Any characters are allowed; the only rule is a minimum length,
/// counted in characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressPart(String);

impl AddressPart {
    /// Create a new AddressPart for the given field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` if the value has fewer than
    /// [`MIN_ADDRESS_PART_LEN`] characters.
    pub fn new(value: impl Into<String>, field: Field) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.chars().count() < MIN_ADDRESS_PART_LEN {
            return Err(ValidationError::TooShort {
                field,
                value,
                min_len: MIN_ADDRESS_PART_LEN,
            });
        }
        Ok(Self(value))
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AddressPart {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for AddressPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for AddressPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
