//! Data models for address book entries.
//!
//! This module contains the contact record and the partial update used to
//! edit it in place.

pub mod contact;

pub use contact::{Contact, ContactUpdate};
