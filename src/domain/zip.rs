//! ZipCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile zip regex"));

/// A six-digit postal code.
///
/// Kept as text so leading zeros survive display; [`ZipCode::numeric`]
/// gives the value used for ordering.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// let zip = ZipCode::new("062001").unwrap();
/// assert_eq!(zip.as_str(), "062001");
/// assert_eq!(zip.numeric(), 62001);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless the input is exactly 6 ASCII digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();
        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }
        Ok(Self(zip))
    }

    /// Get the zip code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The zip code as a number.
    pub fn numeric(&self) -> u32 {
        // Six ASCII digits always fit in a u32.
        self.0
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
