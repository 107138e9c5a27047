//! Domain validation errors.

use std::fmt;

/// A form field that failed its validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The last name is empty or malformed.
    InvalidLastName(String),

    /// The first name is empty or malformed.
    InvalidFirstName(String),

    /// A non-empty middle name is malformed.
    InvalidMiddleName(String),

    /// The birth date doesn't exist or isn't in the past.
    InvalidBirthDate(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLastName(v) => write!(f, "Invalid last name: {:?}", v),
            Self::InvalidFirstName(v) => write!(f, "Invalid first name: {:?}", v),
            Self::InvalidMiddleName(v) => write!(f, "Invalid middle name: {:?}", v),
            Self::InvalidBirthDate(v) => write!(f, "Invalid birth date: {:?}", v),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
