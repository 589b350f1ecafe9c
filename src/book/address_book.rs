//! The address book collection.

use super::collation::locale_compare;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Contact, ContactUpdate};
use serde::Serialize;
use std::cmp::Ordering;

/// An ordered, in-memory collection of contacts.
///
/// Contacts keep insertion order. No two contacts share the same
/// first/last name pair. Search and sort operations return borrowed views
/// and never reorder the stored contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book by adding each contact in turn.
    ///
    /// Fails on the first duplicate name pair.
    pub fn with_contacts<I>(contacts: I) -> AddressBookResult<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut book = Self::new();
        for contact in contacts {
            book.add_contact(contact)?;
        }
        Ok(book)
    }

    /// Append a contact.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateContact` if a contact with the same
    /// first and last name is already stored.
    pub fn add_contact(&mut self, contact: Contact) -> AddressBookResult<()> {
        let first_name = contact.first_name.as_str();
        let last_name = contact.last_name.as_str();

        if self.position(first_name, last_name).is_some() {
            tracing::debug!(first_name, last_name, "Rejected duplicate contact");
            return Err(AddressBookError::duplicate(first_name, last_name));
        }

        tracing::debug!(first_name, last_name, "Contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Update the fields set in `update` on the contact with this name.
    ///
    /// New values are validated before anything changes. Renaming a contact
    /// onto a name pair already used by another contact is rejected.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::NotFound` if no contact has this name.
    /// - `AddressBookError::DuplicateContact` if the rename would collide.
    /// - `AddressBookError::Validation` if a new value is invalid.
    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: ContactUpdate,
    ) -> AddressBookResult<()> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| AddressBookError::not_found(first_name, last_name))?;

        if update.is_empty() {
            tracing::debug!(first_name, last_name, "Empty update, contact unchanged");
            return Ok(());
        }

        if update.renames() {
            let new_first = update.first_name.as_deref().unwrap_or(first_name);
            let new_last = update.last_name.as_deref().unwrap_or(last_name);
            let collides = self
                .contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && c.has_name(new_first, new_last));
            if collides {
                return Err(AddressBookError::duplicate(new_first, new_last));
            }
        }

        self.contacts[index].apply(&update)?;
        tracing::debug!(first_name, last_name, ?update, "Contact updated");
        Ok(())
    }

    /// Remove the contact with this name.
    ///
    /// A missing contact is not an error: the book is left unchanged and
    /// `None` is returned.
    pub fn delete_contact(&mut self, first_name: &str, last_name: &str) -> Option<Contact> {
        match self.position(first_name, last_name) {
            Some(index) => {
                tracing::info!("Contact {} {} deleted successfully.", first_name, last_name);
                Some(self.contacts.remove(index))
            }
            None => {
                tracing::info!("Contact {} {} not found.", first_name, last_name);
                None
            }
        }
    }

    /// Look up a contact by exact name.
    pub fn find_contact(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.has_name(first_name, last_name))
    }

    /// Number of stored contacts.
    pub fn get_contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in storage order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Contacts whose city is exactly `city`, in storage order.
    pub fn search_by_city(&self, city: &str) -> Vec<&Contact> {
        self.filtered(|c| c.city == *city).collect()
    }

    /// Contacts whose state is exactly `state`, in storage order.
    pub fn search_by_state(&self, state: &str) -> Vec<&Contact> {
        self.filtered(|c| c.state == *state).collect()
    }

    /// "First Last" for every contact in `city`.
    pub fn view_by_city(&self, city: &str) -> Vec<String> {
        self.filtered(|c| c.city == *city)
            .map(Contact::full_name)
            .collect()
    }

    /// "First Last" for every contact in `state`.
    pub fn view_by_state(&self, state: &str) -> Vec<String> {
        self.filtered(|c| c.state == *state)
            .map(Contact::full_name)
            .collect()
    }

    pub fn get_count_by_city(&self, city: &str) -> usize {
        self.filtered(|c| c.city == *city).count()
    }

    pub fn get_count_by_state(&self, state: &str) -> usize {
        self.filtered(|c| c.state == *state).count()
    }

    /// Contacts ordered by first name. Ties keep storage order.
    pub fn sort_by_name(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| locale_compare(a.first_name.as_str(), b.first_name.as_str()))
    }

    /// Contacts ordered by city. Ties keep storage order.
    pub fn sort_by_city(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| locale_compare(a.city.as_str(), b.city.as_str()))
    }

    /// Contacts ordered by state. Ties keep storage order.
    pub fn sort_by_state(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| locale_compare(a.state.as_str(), b.state.as_str()))
    }

    /// Contacts ordered by the numeric value of their zip code.
    pub fn sort_by_zip(&self) -> Vec<&Contact> {
        self.sorted_by(|a, b| a.zip.numeric().cmp(&b.zip.numeric()))
    }

    /// Every contact's display text, one block per contact, in storage order.
    pub fn display_contacts(&self) -> String {
        self.contacts
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.has_name(first_name, last_name))
    }

    fn filtered<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Contact>
    where
        P: Fn(&Contact) -> bool,
    {
        self.contacts.iter().filter(move |c| predicate(*c))
    }

    fn sorted_by<F>(&self, mut compare: F) -> Vec<&Contact>
    where
        F: FnMut(&Contact, &Contact) -> Ordering,
    {
        let mut view: Vec<&Contact> = self.contacts.iter().collect();
        // `sort_by` is stable, which keeps equal keys in storage order.
        view.sort_by(|a, b| compare(*a, *b));
        tracing::debug!(count = view.len(), "Built sorted view");
        view
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
