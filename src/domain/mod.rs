//! Form-level contact assembly.
//!
//! A [`ContactForm`] carries the raw text a front-end collects, runs every
//! field validator over it, and assembles a [`Contact`](crate::models::Contact)
//! only when all verdicts pass.

pub mod errors;
pub mod form;

pub use errors::ValidationError;
pub use form::ContactForm;
