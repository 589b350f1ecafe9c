//! Shared helpers for address book integration tests.

pub mod fixtures;

use address_book::{AddressBook, Contact};

/// First names of a listing, in order.
#[allow(dead_code)]
pub fn first_names(contacts: &[&Contact]) -> Vec<String> {
    contacts
        .iter()
        .map(|c| c.first_name.as_str().to_string())
        .collect()
}

/// Assert that the book holds exactly these "First Last" names, in storage order.
#[allow(dead_code)]
pub fn assert_names(book: &AddressBook, expected: &[&str]) {
    let actual: Vec<String> = book.iter().map(Contact::full_name).collect();
    assert_eq!(actual, expected, "Unexpected contacts in address book");
}
