//! Outbound request payload for the inference endpoint.
//!
//! Field names here are the deployed wire contract and must not be changed:
//! that includes the `lattitude` misspelling, which the remote service
//! expects byte-for-byte. All profile-derived values travel as strings.

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use serde::Serialize;

use jyotibot_types::profile::Profile;

/// JSON body POSTed for one chat turn.
///
/// Every field is optional and skipped when absent: with no persisted
/// profile the payload serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "inputText", skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    /// Sic: the deployed contract spells it this way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lattitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl ChatPayload {
    /// Merge the trimmed input with the persisted profile.
    ///
    /// No profile means no fields at all (the degraded condition the remote
    /// service already tolerates). A profile whose location is unresolved
    /// omits the coordinate fields rather than sending nulls.
    pub fn build(input: &str, session_id: &str, profile: Option<&Profile>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        let (hour, minutes, seconds) = split_time(&profile.time);
        let (year, month, day) = split_date(&profile.dob);
        let (latitude, longitude) = match &profile.location {
            Some(loc) => (Some(loc.latitude.clone()), Some(loc.longitude.clone())),
            None => (None, None),
        };

        Self {
            name: Some(profile.name.clone()),
            input_text: Some(input.to_string()),
            session_id: Some(session_id.to_string()),
            gender: Some(profile.gender.to_string()),
            hour: Some(hour),
            minutes: Some(minutes),
            seconds: Some(seconds),
            longitude,
            lattitude: latitude,
            day: Some(day),
            month: Some(month),
            year: Some(year),
            place: Some(profile.address.clone()),
        }
    }
}

/// Split a stored time into two-digit clock components.
///
/// Accepts a plain `HH:MM:SS`, a naive ISO datetime, or a full RFC 3339
/// timestamp (the settings form writes the first; older records may carry
/// either of the others). Unparseable input yields empty components, the
/// same degraded value an unset time produced upstream.
fn split_time(raw: &str) -> (String, String, String) {
    let time = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.time())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.time()))
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"));

    match time {
        Ok(t) => (
            t.format("%H").to_string(),
            t.format("%M").to_string(),
            t.format("%S").to_string(),
        ),
        Err(_) => (String::new(), String::new(), String::new()),
    }
}

/// Slice a stored `YYYY-MM-DD` date into year/month/day components.
///
/// Short or malformed input degrades to empty components instead of
/// panicking on an out-of-range slice.
fn split_date(dob: &str) -> (String, String, String) {
    let slice = |range: std::ops::Range<usize>| {
        dob.get(range).map(str::to_string).unwrap_or_default()
    };
    (slice(0..4), slice(5..7), slice(8..10))
}
