//! Character types returned by the `/character` endpoints.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric character identifier assigned by the API.
pub type CharacterID = i64;

/// A single character record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterID,

    pub name: String,

    /// Life status as sent by the API ("Alive", "Dead" or "unknown").
    pub status: String,

    pub species: String,

    /// Sub-species or variant. Usually empty.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Gender as sent by the API ("Female", "Male", "Genderless" or "unknown").
    pub gender: String,

    /// Place of origin.
    pub origin: Place,

    /// Last known location.
    pub location: Place,

    /// Avatar image URL.
    pub image: String,

    /// Episode URLs in broadcast order.
    pub episode: Vec<String>,

    /// Canonical URL of this character.
    pub url: String,

    pub created: DateTime<Utc>,
}

/// A named place with its API locator. `url` is empty when the place is unknown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// Character life status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead,
    Unknown,
    /// Anything the API may add later, kept verbatim.
    Other(String),
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "alive" => Status::Alive,
            "dead" => Status::Dead,
            "unknown" => Status::Unknown,
            _ => Status::Other(s.to_string()),
        })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Status::Alive => "alive",
                Status::Dead => "dead",
                Status::Unknown => "unknown",
                Status::Other(s) => s.as_str(),
            }
        )
    }
}

/// Character gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    Unknown,
    /// Anything the API may add later, kept verbatim.
    Other(String),
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            "genderless" => Gender::Genderless,
            "unknown" => Gender::Unknown,
            _ => Gender::Other(s.to_string()),
        })
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Female => "female",
                Gender::Male => "male",
                Gender::Genderless => "genderless",
                Gender::Unknown => "unknown",
                Gender::Other(s) => s.as_str(),
            }
        )
    }
}
