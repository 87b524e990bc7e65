//! User profile types.
//!
//! The profile is the personal-context record merged into every outbound
//! inference request: name, date and time of birth, birth place, gender.
//! It is written wholesale by the settings form and read back at send-time;
//! there are no partial updates.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Gender as collected by the settings form.
///
/// Serialized capitalized ("Male"/"Female"/"Other") because that is what the
/// deployed inference endpoint expects in the `gender` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All variants, in form-display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("invalid gender: '{other}'")),
        }
    }
}

/// Geographic coordinates as returned by the geocoder.
///
/// Kept as strings: the geocoder returns them as strings and the inference
/// endpoint expects them as strings, so nothing is gained by parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// The persisted user profile.
///
/// `dob` is an ISO date (`YYYY-MM-DD`); `time` is an ISO time or datetime
/// whose clock components are split out when the outbound payload is built.
/// `location` stays `None` until the address has been geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub dob: String,
    pub time: String,
    pub gender: Gender,
    pub address: String,
    #[serde(default)]
    pub location: Option<Coordinates>,
}
