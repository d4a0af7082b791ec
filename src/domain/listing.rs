// src/domain/listing.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing identifier. The backend sends numbers for listings and strings for
/// saved entries, so equality is always on the stringified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId(s.to_string())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        ListingId(s)
    }
}

impl From<i64> for ListingId {
    fn from(n: i64) -> Self {
        ListingId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ListingId(s),
            Raw::Number(n) => ListingId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    #[serde(rename = "PG")]
    Pg,
    Flat,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Pg => "PG",
            ListingType::Flat => "Flat",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pg" => Ok(ListingType::Pg),
            "flat" => Ok(ListingType::Flat),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

/// A rentable property as returned inside the city-info payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    /// Display price, e.g. "₹14,000/mo".
    pub price: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub area: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Listing {
    /// Monthly rent as an integer, taken from the digits of the display price.
    pub fn rent(&self) -> Option<i64> {
        parse_rent(&self.price)
    }
}

pub fn parse_rent(price: &str) -> Option<i64> {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
