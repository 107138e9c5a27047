//! Phone number entry attached to a contact.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of phone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneType {
    #[default]
    Mobile,
    Home,
    Work,
    Other,
}

impl PhoneType {
    pub const ALL: [PhoneType; 4] = [Self::Mobile, Self::Home, Self::Work, Self::Other];

    /// Text form used in the contacts file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Home => "home",
            Self::Work => "work",
            Self::Other => "other",
        }
    }

    /// Parse a type name; anything unrecognised is `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "mobile" => Self::Mobile,
            "home" => Self::Home,
            "work" => Self::Work,
            _ => Self::Other,
        }
    }
}

impl FromStr for PhoneType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serde support - same text form as the contacts file
impl Serialize for PhoneType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhoneType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneType::parse(&s))
    }
}

/// A phone number kept as raw text.
///
/// No digit normalization happens anywhere: `+7(812)1234567` and
/// `88121234567` are different numbers as far as equality and search go.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,

    #[serde(rename = "type", default)]
    pub phone_type: PhoneType,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            number: number.into(),
            phone_type,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.phone_type)
    }
}
