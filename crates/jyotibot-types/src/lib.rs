//! Shared domain types for Jyotibot.
//!
//! This crate has no I/O and no business logic: just the data model
//! (messages, the user profile, configuration) and the error enums shared
//! across the workspace.

pub mod config;
pub mod error;
pub mod message;
pub mod profile;
