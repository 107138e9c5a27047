//! Field validators for user-supplied contact data.
//!
//! Every validator is a pure, total function returning `bool`. Callers check the
//! verdict before a contact is stored; nothing here panics or errors.

use crate::models::Date;
use crate::text;
use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: the regex crate treats `\d` as any Unicode digit.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+7|8)(?:[0-9]{10}|\([0-9]{3}\)[0-9]{7}|\([0-9]{3}\)[0-9]{3}-[0-9]{2}-[0-9]{2})$")
        .expect("phone pattern is valid")
});

static EMAIL_LOCAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("email local pattern is valid"));

static EMAIL_DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)*$").expect("email domain pattern is valid")
});

fn is_trim_space(c: char) -> bool {
    // C `isspace` set: includes vertical tab, which `is_ascii_whitespace` does not
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip ASCII whitespace from both ends.
pub fn trim(raw: &str) -> &str {
    raw.trim_matches(is_trim_space)
}

/// Validate a last, first or middle name.
///
/// The first character must be a letter; hyphens may not start or end the
/// name; the rest may be letters, digits, hyphens and spaces.
pub fn valid_name(raw: &str) -> bool {
    let trimmed = trim(raw);
    if trimmed.is_empty() {
        return false;
    }

    let chars = text::decode(trimmed.as_bytes());
    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return false;
    };

    if first == '-' || last == '-' {
        return false;
    }
    if !text::is_letter(first) {
        return false;
    }

    chars
        .iter()
        .all(|&c| text::is_letter(c) || text::is_digit(c) || text::is_name_separator(c))
}

/// Validate a Russian phone number.
///
/// Accepted shapes, with `+7` or `8` as prefix:
/// `+7XXXXXXXXXX`, `+7(XXX)XXXXXXX`, `+7(XXX)XXX-XX-XX`.
pub fn valid_phone(raw: &str) -> bool {
    PHONE_REGEX.is_match(trim(raw))
}

/// Validate an email address against a narrow latin-alphanumeric rule set.
///
/// Whitespace around the `@` is tolerated; whitespace inside either part is not.
pub fn valid_email(raw: &str) -> bool {
    let s = trim(raw);
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    let local = trim(local);
    let domain = trim(domain);
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    EMAIL_LOCAL_REGEX.is_match(local) && EMAIL_DOMAIN_REGEX.is_match(domain)
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Validate a birth date against the real calendar and the local date today.
pub fn valid_birth_date(date: &Date) -> bool {
    valid_birth_date_on(date, &Date::today())
}

/// Validate a birth date relative to an explicit `today`.
///
/// The date must exist in the Gregorian calendar and be strictly earlier
/// than `today`.
pub fn valid_birth_date_on(date: &Date, today: &Date) -> bool {
    if date.year <= 0 || !(1..=12).contains(&date.month) || date.day < 1 {
        return false;
    }
    if date.day > days_in_month(date.year, date.month) {
        return false;
    }

    date < today
}
