//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for every contact field: names,
//! address parts, zip codes, phone numbers and email addresses. These value
//! objects validate at construction time and prevent invalid data from being
//! represented in the system.

pub mod address_part;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod zip;

pub use address_part::{AddressPart, MIN_ADDRESS_PART_LEN};
pub use email::EmailAddress;
pub use errors::{Field, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
