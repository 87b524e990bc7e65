//! Conversation logic for Jyotibot.
//!
//! This crate owns the message store, the outbound payload construction,
//! and the per-turn state machine. It does no I/O itself: the network and
//! the profile record are reached through the [`responder::ChatResponder`]
//! and [`profile_provider::ProfileProvider`] trait seams, implemented in
//! `jyotibot-infra` and mocked in tests here.

pub mod conversation;
pub mod payload;
pub mod profile_provider;
pub mod responder;
pub mod store;
