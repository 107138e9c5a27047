//! Shared sample data for integration tests.

#![allow(dead_code)]

use phonebook::{Contact, ContactBook, Date, PhoneNumber, PhoneType};

/// A contact with one mobile phone.
pub fn sample_contact(last: &str, first: &str, email: &str) -> Contact {
    Contact::new(last, first, "", "", Date::new(1990, 1, 1), email)
        .with_phone(PhoneNumber::new("+79990001122", PhoneType::Mobile))
}

/// A fully populated contact with several phones of different types.
pub fn full_contact() -> Contact {
    Contact::new(
        "Иванов",
        "Пётр",
        "Николаевич",
        "Москва, ул. Ленина 1",
        Date::new(2000, 1, 1),
        "test@mail.ru",
    )
    .with_phone(PhoneNumber::new("+79990001122", PhoneType::Mobile))
    .with_phone(PhoneNumber::new("8(812)1234567", PhoneType::Home))
    .with_phone(PhoneNumber::new("+7(495)123-45-67", PhoneType::Work))
    .with_phone(PhoneNumber::new("+79990001122", PhoneType::Other))
}

/// A book of contacts with distinct last names and birth dates.
pub fn sample_book() -> ContactBook {
    let mut book = ContactBook::new();
    book.add(full_contact());
    book.add(
        Contact::new("Adams", "Ann", "", "London", Date::new(1975, 3, 8), "ann@example.org")
            .with_phone(PhoneNumber::new("88121234567", PhoneType::Work)),
    );
    book.add(Contact::new(
        "Сидорова",
        "Мария",
        "Ивановна",
        "Казань",
        Date::new(1988, 11, 30),
        "maria@kazan.ru",
    ));
    book.add(
        Contact::new("Baker", "Bob", "J", "", Date::new(1999, 12, 31), "bob@baker")
            .with_phone(PhoneNumber::new("+7(812)7654321", PhoneType::Home)),
    );
    book
}
