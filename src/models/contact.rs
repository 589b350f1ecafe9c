//! Contact model representing a person in the address book.

use crate::domain::{
    AddressPart, EmailAddress, Field, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated address book entry.
///
/// Every field is a domain value object, so a `Contact` can only be built
/// from input that passed validation. Deserialization goes through
/// [`Contact::new`] as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactRecord")]
pub struct Contact {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub address: AddressPart,
    pub city: AddressPart,
    pub state: AddressPart,
    pub zip: ZipCode,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}

/// Unvalidated wire form of a contact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRecord {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    phone: String,
    email: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.first_name,
            record.last_name,
            record.address,
            record.city,
            record.state,
            record.zip,
            record.phone,
            record.email,
        )
    }
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// Fields are checked in argument order and the first failure is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Contact;
    ///
    /// let contact = Contact::new(
    ///     "Uday", "Kourav", "123 Main St", "Bhopal", "MadhyaPradesh",
    ///     "462001", "9876543210", "uday@example.com",
    /// ).unwrap();
    /// assert_eq!(contact.full_name(), "Uday Kourav");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(first_name, Field::FirstName)?,
            last_name: PersonName::new(last_name, Field::LastName)?,
            address: AddressPart::new(address, Field::Address)?,
            city: AddressPart::new(city, Field::City)?,
            state: AddressPart::new(state, Field::State)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    /// "First Last", as shown in city and state views.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Exact, case-sensitive match on both names.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == *first_name && self.last_name == *last_name
    }

    /// Apply a partial update.
    ///
    /// All present fields are validated before any is assigned, so on error
    /// the contact is left exactly as it was.
    pub fn apply(&mut self, update: &ContactUpdate) -> Result<(), ValidationError> {
        let first_name = update
            .first_name
            .as_deref()
            .map(|v| PersonName::new(v, Field::FirstName))
            .transpose()?;
        let last_name = update
            .last_name
            .as_deref()
            .map(|v| PersonName::new(v, Field::LastName))
            .transpose()?;
        let address = update
            .address
            .as_deref()
            .map(|v| AddressPart::new(v, Field::Address))
            .transpose()?;
        let city = update
            .city
            .as_deref()
            .map(|v| AddressPart::new(v, Field::City))
            .transpose()?;
        let state = update
            .state
            .as_deref()
            .map(|v| AddressPart::new(v, Field::State))
            .transpose()?;
        let zip = update.zip.as_deref().map(ZipCode::new).transpose()?;
        let phone = update.phone.as_deref().map(PhoneNumber::new).transpose()?;
        let email = update.email.as_deref().map(EmailAddress::new).transpose()?;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = zip {
            self.zip = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }

        Ok(())
    }
}

/// Leading whitespace of the second display line.
const CONTINUATION_INDENT: &str = "        ";

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Name: {} {}, Address: {}, City: {}, ",
            self.first_name, self.last_name, self.address, self.city
        )?;
        write!(
            f,
            "{}State: {}, Zip: {}, Phone: {}, Email: {}",
            CONTINUATION_INDENT,
            self.state, self.zip, self.phone, self.email
        )
    }
}

/// Partial update for a contact.
///
/// `None` leaves a field unchanged. Values are plain strings and are only
/// validated when the update is applied.
///
/// # Example
///
/// ```
/// use address_book::ContactUpdate;
///
/// let update = ContactUpdate::new().phone("9999999999").address("456 New St");
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn zip(mut self, value: impl Into<String>) -> Self {
        self.zip = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True if the update changes the first or last name.
    pub fn renames(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}
