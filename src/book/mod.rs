//! Address book collection and ordering helpers.
//!
//! This module provides the [`AddressBook`] container with its CRUD, search,
//! count and sort operations, plus the dictionary-style string comparison
//! used by the sorted views.

mod address_book;
pub mod collation;

pub use address_book::AddressBook;
pub use collation::locale_compare;
