//! Address Book - an in-memory collection of validated contact records.
//!
//! Contacts are validated field by field when they are built, and the
//! [`AddressBook`] keeps them in insertion order with add, edit, delete,
//! search, count, sort and display operations.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The `Contact` record and `ContactUpdate` partial edits
//! - **book**: The `AddressBook` collection and dictionary-style ordering
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Contact, ContactUpdate};
//!
//! let mut book = AddressBook::new();
//! book.add_contact(Contact::new(
//!     "Uday", "Kourav", "123 Main St", "Bhopal", "MadhyaPradesh",
//!     "462001", "9876543210", "uday@example.com",
//! )?)?;
//!
//! book.edit_contact("Uday", "Kourav", ContactUpdate::new().phone("9999999999"))?;
//! assert_eq!(book.get_count_by_city("Bhopal"), 1);
//! assert!(book.display_contacts().contains("Phone: 9999999999"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Field, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{Contact, ContactUpdate};
