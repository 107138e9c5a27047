use phonebook::error::{StoreError, StoreResult};
use phonebook::{Contact, ContactId, ContactStore, MemoryContactStore};
use std::collections::HashMap;

/// Mock contact store for testing.
///
/// Wraps a [`MemoryContactStore`] and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactStore {
    inner: MemoryContactStore,
    call_counts: HashMap<String, usize>,
    fail_inserts: bool,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty, closed MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following insert fail as if the backend were gone.
    pub fn fail_inserts(&mut self) {
        self.fail_inserts = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&mut self) {
        self.call_counts.clear();
    }

    fn track_call(&mut self, method: &str) {
        *self.call_counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn open(&mut self) -> StoreResult<()> {
        self.track_call("open");
        self.inner.open()
    }

    fn close(&mut self) {
        self.track_call("close");
        self.inner.close();
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn load_all(&self) -> StoreResult<Vec<(ContactId, Contact)>> {
        self.inner.load_all()
    }

    fn insert(&mut self, contact: &Contact) -> StoreResult<ContactId> {
        self.track_call("insert");
        if self.fail_inserts {
            return Err(StoreError::NotOpen);
        }
        self.inner.insert(contact)
    }

    fn update(&mut self, id: ContactId, contact: &Contact) -> StoreResult<()> {
        self.track_call("update");
        self.inner.update(id, contact)
    }

    fn delete(&mut self, id: ContactId) -> StoreResult<()> {
        self.track_call("delete");
        self.inner.delete(id)
    }
}
