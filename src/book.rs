//! In-memory contact collection with search and sort.

use crate::error::StorageResult;
use crate::models::Contact;
use crate::storage;
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

/// Field a [`ContactBook`] can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Raw lexicographic order of the last name (no locale collation)
    LastName,
    /// `(year, month, day)` order of the birth date
    BirthDate,
}

impl SortField {
    fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::LastName => a.last_name.cmp(&b.last_name),
            Self::BirthDate => a.birth_date.cmp(&b.birth_date),
        }
    }
}

/// Ordered list of contacts addressed by position.
///
/// The book has no internal synchronization; it expects a single writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Load a book from a contacts file.
    ///
    /// A missing file yields an empty book. Any structural error fails the
    /// whole load; see [`crate::storage`] for the exact rules.
    pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        storage::load(path).map(Self::from_contacts)
    }

    /// Write every contact, in current order, to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        storage::save(path, &self.contacts)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Append a contact at the end.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove the contact at `index`. Returns `false` if out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.contacts.len() {
            debug!(index, len = self.contacts.len(), "Remove index out of range");
            return false;
        }
        self.contacts.remove(index);
        true
    }

    /// Replace the contact at `index`. Returns `false` if out of range.
    pub fn update(&mut self, index: usize, contact: Contact) -> bool {
        match self.contacts.get_mut(index) {
            Some(slot) => {
                *slot = contact;
                true
            }
            None => {
                debug!(index, len = self.contacts.len(), "Update index out of range");
                false
            }
        }
    }

    /// Positions of contacts containing `text` (case-sensitive) in a name,
    /// email, address or any phone number. An empty query matches nothing.
    pub fn find(&self, text: &str) -> Vec<usize> {
        if text.is_empty() {
            return Vec::new();
        }

        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| Self::matches(c, text))
            .map(|(i, _)| i)
            .collect()
    }

    fn matches(contact: &Contact, text: &str) -> bool {
        contact.last_name.contains(text)
            || contact.first_name.contains(text)
            || contact.middle_name.contains(text)
            || contact.email.contains(text)
            || contact.address.contains(text)
            || contact.phones.iter().any(|p| p.number.contains(text))
    }

    /// Sort in place. Descending order reverses the comparison; equal keys
    /// keep their relative order either way.
    pub fn sort_by(&mut self, field: SortField, ascending: bool) {
        if ascending {
            self.contacts.sort_by(|a, b| field.compare(a, b));
        } else {
            self.contacts.sort_by(|a, b| field.compare(b, a));
        }
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
