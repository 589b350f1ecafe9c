//! Domain validation errors.

use std::fmt;

/// The contact field a value belongs to.
///
/// Used to label validation failures so callers can tell which input was
/// rejected without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl Field {
    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A first or last name is not a capitalized word of at least 3 letters.
    InvalidName { field: Field, value: String },

    /// An address, city or state value is shorter than the minimum length.
    TooShort {
        field: Field,
        value: String,
        min_len: usize,
    },

    /// The zip code is not exactly 6 digits.
    InvalidZip(String),

    /// The phone number is not 10 digits starting with 6-9.
    InvalidPhone(String),

    /// The email address does not have a `local@domain.tld` shape.
    InvalidEmail(String),
}

impl ValidationError {
    /// The field whose value was rejected.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidName { field, .. } | Self::TooShort { field, .. } => *field,
            Self::InvalidZip(_) => Field::Zip,
            Self::InvalidPhone(_) => Field::Phone,
            Self::InvalidEmail(_) => Field::Email,
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidName { value, .. } | Self::TooShort { value, .. } => value.as_str(),
            Self::InvalidZip(value) | Self::InvalidPhone(value) | Self::InvalidEmail(value) => {
                value.as_str()
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, .. } => write!(
                f,
                "{} must start with a capital letter and have at least 3 characters.",
                field
            ),
            Self::TooShort { field, min_len, .. } => {
                write!(f, "{} must be at least {} characters long.", field, min_len)
            }
            Self::InvalidZip(_) => write!(f, "Zip code must be exactly 6 digits."),
            Self::InvalidPhone(_) => write!(
                f,
                "Phone number must be 10 digits and start with 6, 7, 8, or 9."
            ),
            Self::InvalidEmail(_) => write!(f, "Invalid email format."),
        }
    }
}

impl std::error::Error for ValidationError {}
