//! Jyotibot CLI entry point.
//!
//! Binary name: `jyoti`
//!
//! Parses CLI arguments, resolves the data dir and config, then dispatches
//! to the chat loop or the profile/status commands.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ProfileCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,jyotibot=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat => {
            cli::chat::run_chat_loop(&state).await?;
        }

        Commands::Profile { action } => match action {
            ProfileCommand::Set => {
                cli::profile::set_profile(&state).await?;
            }
            ProfileCommand::Show => {
                cli::profile::show_profile(&state, cli.json).await?;
            }
        },

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }
    }

    Ok(())
}
