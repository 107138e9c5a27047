use crate::error::StoreResult;
use crate::models::Contact;

/// Surrogate id assigned by a store backend.
///
/// Ids exist only inside a store; a [`ContactBook`](crate::book::ContactBook)
/// addresses contacts by position instead.
pub type ContactId = i64;

/// Handle to an alternate contact storage backend.
///
/// A store is constructed and passed explicitly. It must be opened before use
/// and may be closed and reopened; every data operation on a closed store
/// fails with [`StoreError::NotOpen`](crate::error::StoreError::NotOpen).
/// Backends exchange plain [`Contact`] values and keep the same field
/// semantics as the text file.
pub trait ContactStore {
    /// Open the connection. Opening an open store is a no-op.
    fn open(&mut self) -> StoreResult<()>;

    /// Close the connection. Closing a closed store is a no-op.
    fn close(&mut self);

    fn is_open(&self) -> bool;

    /// All stored contacts with their ids, in insertion order.
    fn load_all(&self) -> StoreResult<Vec<(ContactId, Contact)>>;

    /// Store a new contact and return its id.
    fn insert(&mut self, contact: &Contact) -> StoreResult<ContactId>;

    /// Replace the contact stored under `id`, phones included.
    fn update(&mut self, id: ContactId, contact: &Contact) -> StoreResult<()>;

    /// Delete the contact stored under `id`.
    fn delete(&mut self, id: ContactId) -> StoreResult<()>;
}
