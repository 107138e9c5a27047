mod memory_store;
mod traits;

pub use memory_store::MemoryContactStore;
pub use traits::{ContactId, ContactStore};
