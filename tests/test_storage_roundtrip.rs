//! Generated round-trips through the contacts file format.
//!
//! Any field text survives `to_string` then `parse` unchanged, as long as it
//! holds no newline, no `|` in a phone number, and no trailing `\r` in a
//! line-final field.

use phonebook::{storage, Contact, Date, PhoneNumber, PhoneType};
use proptest::prelude::*;

/// Text for a line-final field: no newline, `|` or trailing `\r`.
fn field_strategy() -> impl Strategy<Value = String> {
    "([^\n|]*[^\n|\r])?"
}

/// Phone numbers sit before the `|`, so any `\r` is kept.
fn number_strategy() -> impl Strategy<Value = String> {
    "[^\n|]*"
}

fn phone_type_strategy() -> impl Strategy<Value = PhoneType> {
    prop_oneof![
        Just(PhoneType::Mobile),
        Just(PhoneType::Home),
        Just(PhoneType::Work),
        Just(PhoneType::Other),
    ]
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (1..=9999i32, 1..=12u32, 1..=31u32).prop_map(|(y, m, d)| Date::new(y, m, d))
}

fn phone_strategy() -> impl Strategy<Value = PhoneNumber> {
    (number_strategy(), phone_type_strategy()).prop_map(|(n, t)| PhoneNumber::new(n, t))
}

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        date_strategy(),
        field_strategy(),
        prop::collection::vec(phone_strategy(), 0..5),
    )
        .prop_map(|(last, first, middle, address, birth_date, email, phones)| {
            let mut contact = Contact::new(last, first, middle, address, birth_date, email);
            for phone in phones {
                contact.add_phone(phone);
            }
            contact
        })
}

proptest! {
    #[test]
    fn test_arbitrary_contacts_round_trip(contacts in prop::collection::vec(contact_strategy(), 0..8)) {
        let text = storage::to_string(&contacts);
        let back = storage::parse(&text).unwrap();
        prop_assert_eq!(back, contacts);
    }

    #[test]
    fn test_padded_numbers_round_trip(number in " {0,3}[0-9+()\\- ]{1,15} {0,3}") {
        let contacts = vec![Contact::new("A", "B", "", "", Date::new(2000, 1, 1), "a@b")
            .with_phone(PhoneNumber::new(number.clone(), PhoneType::Home))];
        let back = storage::parse(&storage::to_string(&contacts)).unwrap();
        prop_assert_eq!(&back[0].phones[0].number, &number);
    }
}
