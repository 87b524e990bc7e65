//! Interactive terminal chat experience.
//!
//! Implements the chat loop: async line input, a thinking spinner while a
//! turn is pending, and styled rendering of replies. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod input;
pub mod loop_runner;

pub use loop_runner::run_chat_loop;
