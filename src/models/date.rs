//! Calendar date as stored in the contacts file.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A year/month/day triple with no calendar rules attached.
///
/// Field order matters: the derived `Ord` compares `(year, month, day)`
/// lexicographically, which is the order birth dates sort in.
///
/// # Example
///
/// ```
/// use phonebook::models::Date;
///
/// let d = Date::parse("1990-7-4");
/// assert_eq!(d.to_string(), "1990-07-04");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse the first three digit runs of `s` as year, month and day.
    ///
    /// Any non-digit character separates runs. Missing parts are zero, so
    /// parsing always succeeds and may yield a structurally invalid date.
    pub fn parse(s: &str) -> Self {
        let mut parts = s
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty());

        let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);

        Self { year, month, day }
    }

    /// Nominal ranges only: year > 0, month 1-12, day 1-31.
    pub fn is_structurally_valid(&self) -> bool {
        self.year > 0 && (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }

    /// The local wall-clock date.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }
}

impl From<chrono::NaiveDate> for Date {
    fn from(d: chrono::NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// Serde support - serialize as canonical YYYY-MM-DD
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Date::parse(&s))
    }
}
