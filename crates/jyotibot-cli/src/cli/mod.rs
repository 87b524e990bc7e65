//! CLI command definitions and dispatch for the `jyoti` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod profile;
pub mod status;

use clap::{Parser, Subcommand};

/// Chat with your astrologer from the terminal.
#[derive(Parser)]
#[command(name = "jyoti", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Manage the persisted user profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show data dir, config, and profile status.
    Status,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Fill in and save the profile (replaces any existing record).
    Set,

    /// Print the stored profile.
    Show,
}
