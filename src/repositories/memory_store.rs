use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::traits::{ContactId, ContactStore};
use std::collections::BTreeMap;
use tracing::debug;

/// Contact store kept in process memory.
///
/// Ids are assigned from a counter starting at 1 and never reused. Emails are
/// unique across stored contacts (exact, case-sensitive match). Contents survive
/// `close`/`open` cycles of the same handle.
#[derive(Debug)]
pub struct MemoryContactStore {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: ContactId,
    open: bool,
}

impl MemoryContactStore {
    /// Create a closed, empty store.
    pub fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            next_id: 1,
            open: false,
        }
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(StoreError::NotOpen)
        }
    }

    fn ensure_unique_email(&self, email: &str, except: Option<ContactId>) -> StoreResult<()> {
        let taken = self
            .contacts
            .iter()
            .any(|(id, c)| Some(*id) != except && c.email == email);
        if taken {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }
        Ok(())
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryContactStore {
    fn open(&mut self) -> StoreResult<()> {
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn load_all(&self) -> StoreResult<Vec<(ContactId, Contact)>> {
        self.ensure_open()?;
        Ok(self
            .contacts
            .iter()
            .map(|(id, c)| (*id, c.clone()))
            .collect())
    }

    fn insert(&mut self, contact: &Contact) -> StoreResult<ContactId> {
        self.ensure_open()?;
        self.ensure_unique_email(&contact.email, None)?;

        let id = self.next_id;
        self.next_id += 1;
        self.contacts.insert(id, contact.clone());

        debug!(id, "Inserted contact");
        Ok(id)
    }

    fn update(&mut self, id: ContactId, contact: &Contact) -> StoreResult<()> {
        self.ensure_open()?;
        if !self.contacts.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        self.ensure_unique_email(&contact.email, Some(id))?;

        self.contacts.insert(id, contact.clone());
        debug!(id, "Updated contact");
        Ok(())
    }

    fn delete(&mut self, id: ContactId) -> StoreResult<()> {
        self.ensure_open()?;
        self.contacts
            .remove(&id)
            .map(|_| debug!(id, "Deleted contact"))
            .ok_or(StoreError::NotFound(id))
    }
}
