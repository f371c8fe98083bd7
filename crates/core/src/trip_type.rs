//! Trip categories.
//!
//! Serialized as its ordinal (`0`, `1`, `2`), which is what web clients
//! switch on. Deserialization accepts the ordinal or the name (`"Kayak"`,
//! case-insensitive). The database stores the name.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    Kayak,
    Hiking,
    General,
}

impl TripType {
    pub const ALL: [TripType; 3] = [TripType::Kayak, TripType::Hiking, TripType::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Kayak => "Kayak",
            TripType::Hiking => "Hiking",
            TripType::General => "General",
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::Validation(format!("Unknown trip type '{trimmed}'")))
    }
}

impl TryFrom<String> for TripType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for TripType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for TripType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Ordinal(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
            Repr::Ordinal(n) => Self::from_ordinal(n)
                .ok_or_else(|| de::Error::custom(format!("unknown trip type ordinal {n}"))),
        }
    }
}
