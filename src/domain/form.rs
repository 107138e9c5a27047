//! Raw contact fields as entered by a user.

use super::errors::ValidationError;
use crate::models::{Contact, Date, PhoneNumber, PhoneType};
use crate::validation::{self, trim};

/// Raw, untrimmed input for a new contact with a single phone.
///
/// # Example
///
/// ```
/// use phonebook::domain::ContactForm;
///
/// let form = ContactForm {
///     last_name: "Иванов".into(),
///     first_name: "Иван".into(),
///     birth_date: "1990-05-01".into(),
///     email: "ivan@mail.ru".into(),
///     phone: "+79990001122".into(),
///     phone_type: "mobile".into(),
///     ..Default::default()
/// };
/// let contact = form.into_contact().unwrap();
/// assert_eq!(contact.phones.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub last_name: String,
    pub first_name: String,
    /// Optional; validated only when non-blank
    pub middle_name: String,
    /// Free text, never validated
    pub address: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
    /// `mobile`, `home`, `work` or `other`; anything else becomes `other`
    pub phone_type: String,
}

impl ContactForm {
    /// Run every validator, relative to the local date today.
    pub fn validate(&self) -> Vec<ValidationError> {
        self.validate_on(&Date::today())
    }

    /// Run every validator, relative to an explicit `today`.
    ///
    /// Returns one error per failing field, in form order.
    pub fn validate_on(&self, today: &Date) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !validation::valid_name(&self.last_name) {
            errors.push(ValidationError::InvalidLastName(self.last_name.clone()));
        }
        if !validation::valid_name(&self.first_name) {
            errors.push(ValidationError::InvalidFirstName(self.first_name.clone()));
        }
        if !trim(&self.middle_name).is_empty() && !validation::valid_name(&self.middle_name) {
            errors.push(ValidationError::InvalidMiddleName(self.middle_name.clone()));
        }

        let date = Date::parse(trim(&self.birth_date));
        if !date.is_structurally_valid() || !validation::valid_birth_date_on(&date, today) {
            errors.push(ValidationError::InvalidBirthDate(self.birth_date.clone()));
        }

        if !validation::valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail(self.email.clone()));
        }
        if !validation::valid_phone(&self.phone) {
            errors.push(ValidationError::InvalidPhone(self.phone.clone()));
        }

        errors
    }

    /// Validate and build the contact, relative to the local date today.
    pub fn into_contact(self) -> Result<Contact, Vec<ValidationError>> {
        self.into_contact_on(&Date::today())
    }

    /// Validate and build the contact with trimmed fields and one phone.
    pub fn into_contact_on(self, today: &Date) -> Result<Contact, Vec<ValidationError>> {
        let errors = self.validate_on(today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = PhoneNumber::new(trim(&self.phone), PhoneType::parse(trim(&self.phone_type)));
        Ok(Contact::new(
            trim(&self.last_name),
            trim(&self.first_name),
            trim(&self.middle_name),
            trim(&self.address),
            Date::parse(trim(&self.birth_date)),
            trim(&self.email),
        )
        .with_phone(phone))
    }
}
