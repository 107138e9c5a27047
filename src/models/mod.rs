//! Data models for the contact directory.
//!
//! These types hold data only; field rules live in [`crate::validation`].

pub mod contact;
pub mod date;
pub mod phone;

pub use contact::Contact;
pub use date::Date;
pub use phone::{PhoneNumber, PhoneType};
