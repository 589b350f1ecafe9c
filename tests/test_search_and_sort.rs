//! Integration tests for search, view, count, sort and display.

mod common;

use address_book::AddressBook;
use common::{first_names, fixtures::*};

#[test]
fn test_search_by_city_exact_match() {
    let book = sample_book();
    let results = book.search_by_city("Bhopal");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0], &uday());

    assert!(book.search_by_city("bhopal").is_empty());
    assert!(book.search_by_city("Bhopal ").is_empty());
}

#[test]
fn test_search_by_state_preserves_order() {
    let book = sample_book();
    let results = book.search_by_state("MadhyaPradesh");
    assert_eq!(first_names(&results), vec!["Uday", "John", "Ankit", "Bhupendra"]);
    assert!(book.search_by_state("Madhya Pradesh").is_empty());
}

#[test]
fn test_view_projects_full_names() {
    let mut book = sample_book();
    book.add_contact(sample_contact(
        "Ravi",
        "Verma",
        "Bhopal",
        "MadhyaPradesh",
        "462003",
    ))
    .unwrap();

    assert_eq!(book.view_by_city("Bhopal"), vec!["Uday Kourav", "Ravi Verma"]);
    assert_eq!(book.view_by_state("MadhyaPradesh").len(), 5);
    assert!(book.view_by_state("Rajasthan").is_empty());
}

#[test]
fn test_counts_match_search_lengths() {
    let mut book = sample_book();
    book.add_contact(sample_contact(
        "Ravi",
        "Verma",
        "Jaipur",
        "Rajasthan",
        "302001",
    ))
    .unwrap();

    for city in ["Bhopal", "Indore", "Jaipur", "Nowhere"] {
        assert_eq!(book.get_count_by_city(city), book.search_by_city(city).len());
    }
    for state in ["MadhyaPradesh", "Rajasthan", "Kerala"] {
        assert_eq!(
            book.get_count_by_state(state),
            book.search_by_state(state).len()
        );
    }
    assert_eq!(book.get_count_by_state("MadhyaPradesh"), 4);
    assert_eq!(book.get_count_by_state("Rajasthan"), 1);
}

#[test]
fn test_sort_by_zip_is_numeric_ascending() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "Jabalpur", "MadhyaPradesh", "482001"),
        sample_contact("Bravo", "Two", "Indore", "MadhyaPradesh", "452001"),
        sample_contact("Charlie", "Three", "Bhopal", "MadhyaPradesh", "462001"),
    ])
    .unwrap();

    let zips: Vec<&str> = book.sort_by_zip().iter().map(|c| c.zip.as_str()).collect();
    assert_eq!(zips, vec!["452001", "462001", "482001"]);
}

#[test]
fn test_sort_by_zip_with_leading_zeros() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "Jabalpur", "MadhyaPradesh", "100000"),
        sample_contact("Bravo", "Two", "Indore", "MadhyaPradesh", "099999"),
    ])
    .unwrap();

    let zips: Vec<&str> = book.sort_by_zip().iter().map(|c| c.zip.as_str()).collect();
    assert_eq!(zips, vec!["099999", "100000"]);
}

#[test]
fn test_sort_by_name_is_stable_for_shared_first_name() {
    let book = AddressBook::with_contacts([
        sample_contact("John", "Zeta", "Bhopal", "MadhyaPradesh", "462001"),
        sample_contact("Ankit", "Kourav", "Bhopal", "MadhyaPradesh", "462001"),
        sample_contact("John", "Alpha", "Bhopal", "MadhyaPradesh", "462001"),
    ])
    .unwrap();

    let names: Vec<String> = book.sort_by_name().iter().map(|c| c.full_name()).collect();
    assert_eq!(names, vec!["Ankit Kourav", "John Zeta", "John Alpha"]);
}

#[test]
fn test_sort_by_name_sample_book() {
    let book = sample_book();
    assert_eq!(
        first_names(&book.sort_by_name()),
        vec!["Ankit", "Bhupendra", "John", "Uday"]
    );
    // Stored order is untouched.
    assert_eq!(book.contacts()[0].first_name.as_str(), "Uday");
}

#[test]
fn test_sort_by_city_ignores_case() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "indore", "MadhyaPradesh", "452001"),
        sample_contact("Bravo", "Two", "Bhopal", "MadhyaPradesh", "462001"),
        sample_contact("Charlie", "Three", "Jabalpur", "MadhyaPradesh", "482001"),
    ])
    .unwrap();

    let cities: Vec<&str> = book.sort_by_city().iter().map(|c| c.city.as_str()).collect();
    assert_eq!(cities, vec!["Bhopal", "indore", "Jabalpur"]);
}

#[test]
fn test_sort_by_city_places_accented_letters_with_their_base() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "Faridabad", "Haryana", "121001"),
        sample_contact("Bravo", "Two", "Étawah", "UttarPradesh", "206001"),
        sample_contact("Charlie", "Three", "Etawah", "UttarPradesh", "206002"),
    ])
    .unwrap();

    let cities: Vec<&str> = book.sort_by_city().iter().map(|c| c.city.as_str()).collect();
    assert_eq!(cities, vec!["Etawah", "Étawah", "Faridabad"]);
}

#[test]
fn test_sort_by_city_orders_punctuation() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "New-Delhi", "Delhi", "110001"),
        sample_contact("Bravo", "Two", "New_Delhi", "Delhi", "110002"),
        sample_contact("Charlie", "Three", "New Delhi", "Delhi", "110003"),
    ])
    .unwrap();

    let cities: Vec<&str> = book.sort_by_city().iter().map(|c| c.city.as_str()).collect();
    assert_eq!(cities, vec!["New Delhi", "New_Delhi", "New-Delhi"]);
}

#[test]
fn test_sort_by_state_with_accents() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "Bhopal", "Odisha", "751001"),
        sample_contact("Bravo", "Two", "Indore", "Óblast", "452001"),
        sample_contact("Charlie", "Three", "Pune", "Nagaland", "797001"),
    ])
    .unwrap();

    let states: Vec<&str> = book
        .sort_by_state()
        .iter()
        .map(|c| c.state.as_str())
        .collect();
    assert_eq!(states, vec!["Nagaland", "Óblast", "Odisha"]);
}

#[test]
fn test_sort_by_state() {
    let book = AddressBook::with_contacts([
        sample_contact("Alpha", "One", "Jaipur", "Rajasthan", "302001"),
        sample_contact("Bravo", "Two", "Bhopal", "MadhyaPradesh", "462001"),
        sample_contact("Charlie", "Three", "Pune", "Maharashtra", "411001"),
    ])
    .unwrap();

    let states: Vec<&str> = book
        .sort_by_state()
        .iter()
        .map(|c| c.state.as_str())
        .collect();
    assert_eq!(states, vec!["MadhyaPradesh", "Maharashtra", "Rajasthan"]);
}

#[test]
fn test_display_contacts_joins_in_storage_order() {
    let book = AddressBook::with_contacts([uday(), john()]).unwrap();
    let expected = format!("{}\n{}", uday(), john());
    assert_eq!(book.display_contacts(), expected);
    assert_eq!(book.display_contacts().lines().count(), 4);
}

#[test]
fn test_display_contacts_line_layout() {
    let book = AddressBook::with_contacts([uday()]).unwrap();
    let display = book.display_contacts();
    let lines: Vec<&str> = display.lines().collect();

    assert_eq!(
        lines[0],
        "Name: Uday Kourav, Address: 123 Main St, City: Bhopal, "
    );
    assert_eq!(
        lines[1],
        "        State: MadhyaPradesh, Zip: 462001, Phone: 9876543210, Email: uday@example.com"
    );
}

#[test]
fn test_views_reflect_edits_and_deletes() {
    let mut book = sample_book();
    book.delete_contact("Uday", "Kourav");

    assert_eq!(book.get_count_by_city("Bhopal"), 0);
    assert!(book.view_by_city("Bhopal").is_empty());
    assert_eq!(book.get_contact_count(), 3);
}
