//! Contact model representing a person in the directory.

use super::{Date, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record.
///
/// A contact carries no identity of its own; inside a
/// [`ContactBook`](crate::book::ContactBook) it is addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub address: String,
    pub birth_date: Date,
    pub email: String,

    /// Phone numbers in insertion order; duplicates are allowed
    pub phones: Vec<PhoneNumber>,
}

impl Contact {
    /// Create a contact with no phones.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        address: impl Into<String>,
        birth_date: Date,
        email: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            address: address.into(),
            birth_date,
            email: email.into(),
            phones: Vec::new(),
        }
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    /// Builder-style variant of [`Contact::add_phone`].
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phones.push(phone);
        self
    }

    /// "Last First Middle", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Last name:   {}", self.last_name)?;
        writeln!(f, "First name:  {}", self.first_name)?;
        writeln!(f, "Middle name: {}", self.middle_name)?;
        writeln!(f, "Address:     {}", self.address)?;
        writeln!(f, "Birth date:  {}", self.birth_date)?;
        writeln!(f, "Email:       {}", self.email)?;
        write!(f, "Phones:")?;
        for (i, phone) in self.phones.iter().enumerate() {
            write!(f, "\n  [{}] {}", i, phone)?;
        }
        Ok(())
    }
}
