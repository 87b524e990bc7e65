//! Infrastructure implementations for Jyotibot.
//!
//! Concrete counterparts to the trait seams in `jyotibot-core`: the
//! reqwest-backed inference responder, the Nominatim geocoding client, and
//! the JSON-file profile store, plus data-dir and config resolution.

pub mod config;
pub mod filesystem;
pub mod geocode;
pub mod inference;
pub mod profile_store;
