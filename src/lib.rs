//! Phonebook - a personal contact directory.
//!
//! Stores structured contact records, validates user-supplied fields against
//! fixed format rules, persists contacts in a line-oriented text file, and
//! supports substring search and sorting over the in-memory collection.
//!
//! # Architecture
//!
//! - **text**: Best-effort UTF-8 decoding and letter/digit/separator classes
//! - **validation**: Name, phone, email and birth date validators
//! - **models**: `Contact`, `PhoneNumber` and `Date`
//! - **book**: `ContactBook`, the ordered collection with find and sort
//! - **storage**: The contacts file format
//! - **domain**: Raw input forms that validate and assemble contacts
//! - **repositories**: Interface for alternate storage backends
//! - **config**: Front-end configuration from environment variables
//! - **error**: Custom error types

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod storage;
pub mod text;
pub mod validation;

pub use book::{ContactBook, SortField};
pub use config::Config;
pub use domain::{ContactForm, ValidationError};
pub use error::{ConfigError, StorageError, StoreError};
pub use models::{Contact, Date, PhoneNumber, PhoneType};
pub use repositories::{ContactId, ContactStore, MemoryContactStore};
