//! Test fixtures and sample data.
//!
//! The four sample contacts mirror the ones the demo binary loads.

use address_book::{AddressBook, Contact};

/// Build a contact from known-good values, overriding city, state and zip.
#[allow(dead_code)]
pub fn sample_contact(
    first_name: &str,
    last_name: &str,
    city: &str,
    state: &str,
    zip: &str,
) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "123 Main St",
        city,
        state,
        zip,
        "9876543210",
        format!("{}@example.com", first_name.to_lowercase()),
    )
    .expect("fixture contact should be valid")
}

#[allow(dead_code)]
pub fn uday() -> Contact {
    Contact::new(
        "Uday",
        "Kourav",
        "123 Main St",
        "Bhopal",
        "MadhyaPradesh",
        "462001",
        "9876543210",
        "uday@example.com",
    )
    .expect("fixture contact should be valid")
}

#[allow(dead_code)]
pub fn john() -> Contact {
    Contact::new(
        "John",
        "Kourav",
        "456 Park Ave",
        "Indore",
        "MadhyaPradesh",
        "452001",
        "9876543211",
        "john@example.com",
    )
    .expect("fixture contact should be valid")
}

#[allow(dead_code)]
pub fn ankit() -> Contact {
    Contact::new(
        "Ankit",
        "Kourav",
        "122 Main St",
        "Kareli",
        "MadhyaPradesh",
        "472001",
        "9876545210",
        "ankit@example.com",
    )
    .expect("fixture contact should be valid")
}

#[allow(dead_code)]
pub fn bhupendra() -> Contact {
    Contact::new(
        "Bhupendra",
        "Kourav",
        "451 Park Ave",
        "Imaliya",
        "MadhyaPradesh",
        "482001",
        "9879543211",
        "bhupendra@example.com",
    )
    .expect("fixture contact should be valid")
}

/// The demo's address book before any edits.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    AddressBook::with_contacts([uday(), john(), ankit(), bhupendra()])
        .expect("fixture contacts should not collide")
}
