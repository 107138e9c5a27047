//! Integration tests for the field validators.

use phonebook::validation::{
    days_in_month, valid_birth_date, valid_birth_date_on, valid_email, valid_name, valid_phone,
};
use phonebook::Date;

#[test]
fn test_name_cases() {
    let cases = [
        ("Иван", true),
        ("Иван Иванов", true),
        ("Пётр-Петров", true),
        ("  Анна-Мария  ", true),
        ("John123", true),
        ("ЁЛКИН", true),
        ("-Иван", false),
        ("Иван-", false),
        ("  -Иван  ", false),
        ("123Иван", false),
        ("Иван!", false),
        ("Іван", false),
        (" ", false),
        ("", false),
    ];

    for (name, expected) in cases {
        assert_eq!(valid_name(name), expected, "valid_name({:?})", name);
    }
}

#[test]
fn test_phone_cases() {
    let cases = [
        ("+78121234567", true),
        ("88121234567", true),
        ("+7(812)1234567", true),
        ("8(812)1234567", true),
        ("+7(812)123-45-67", true),
        ("8(812)123-45-67", true),
        ("+79991234567", true),
        ("7121234567", false),
        ("+7812", false),
        ("+7(812)123-45", false),
        ("+7(812)123-45-678", false),
        ("+7 (812) 123-45-67", false),
        ("+44(812)1234567", false),
        ("text", false),
    ];

    for (phone, expected) in cases {
        assert_eq!(valid_phone(phone), expected, "valid_phone({:?})", phone);
    }
}

#[test]
fn test_email_cases() {
    let cases = [
        ("user1@domain1", true),
        ("user123@domain123.sub", true),
        ("   user1   @   domain1   ", true),
        ("user@", false),
        ("@domain", false),
        ("us er@domain", false),
        ("user@do main", false),
        ("user@domain!", false),
        ("first.last@domain", false),
        ("user@sub..domain", false),
        ("", false),
    ];

    for (email, expected) in cases {
        assert_eq!(valid_email(email), expected, "valid_email({:?})", email);
    }
}

#[test]
fn test_birth_date_calendar_rules() {
    assert!(valid_birth_date(&Date::parse("2000-01-01")));
    assert!(valid_birth_date(&Date::parse("2024-02-29")));
    assert!(!valid_birth_date(&Date::parse("2023-02-29")));
    assert!(!valid_birth_date(&Date::parse("1900-02-29")));
    assert!(valid_birth_date(&Date::parse("2000-02-29")));
    assert!(!valid_birth_date(&Date::parse("2020-04-31")));
    assert!(!valid_birth_date(&Date::parse("0000-01-01")));
    assert!(!valid_birth_date(&Date::parse("2025-13-01")));
    assert!(!valid_birth_date(&Date::parse("2025-12-00")));
}

#[test]
fn test_birth_date_must_be_strictly_past() {
    let today = Date::today();
    assert!(!valid_birth_date(&today));
    assert!(!valid_birth_date(&Date::new(today.year + 1, 1, 1)));
    assert!(!valid_birth_date(&Date::parse("3000-01-01")));
}

#[test]
fn test_birth_date_year_boundary() {
    let today = Date::new(2026, 1, 1);
    assert!(valid_birth_date_on(&Date::new(2025, 12, 31), &today));
    assert!(!valid_birth_date_on(&Date::new(2026, 1, 1), &today));
}

#[test]
fn test_leap_day_follows_year() {
    for year in [1996, 2000, 2004, 2400] {
        assert_eq!(days_in_month(year, 2), 29, "{} is a leap year", year);
    }
    for year in [1900, 1999, 2100, 2023] {
        assert_eq!(days_in_month(year, 2), 28, "{} is not a leap year", year);
    }
}

#[test]
fn test_validators_are_pure() {
    let inputs = ["Иван", "-x", "+78121234567", "user@domain", "", "  "];
    for input in inputs {
        let first = (valid_name(input), valid_phone(input), valid_email(input));
        for _ in 0..3 {
            assert_eq!(
                (valid_name(input), valid_phone(input), valid_email(input)),
                first
            );
        }
    }

    let date = Date::new(1990, 6, 15);
    assert_eq!(valid_birth_date(&date), valid_birth_date(&date));
}
