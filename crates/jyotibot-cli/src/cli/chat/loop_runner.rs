//! Main chat loop orchestration.
//!
//! Wires the conversation controller to the terminal: reads a line, runs
//! the turn with a thinking spinner, prints the reply. Input is not read
//! again until the pending turn resolves, which is the whole concurrency
//! policy.

use console::style;
use tracing::info;

use jyotibot_core::conversation::{ConversationController, SubmitOutcome};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::input::{PromptEvent, PromptReader};

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let responder = state.create_responder()?;
    let profiles = state.profile_store.clone();
    let mut controller =
        ConversationController::new(responder, profiles, state.config.session_id.clone());

    print_welcome_banner(
        &state.config.endpoint_url,
        state.profile_store.exists().await,
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut reader, _writer) = PromptReader::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match reader.next_event().await {
            PromptEvent::Closed => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            PromptEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            PromptEvent::Submitted(text) => {
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .expect("static spinner template"),
                );
                spinner.set_message("consulting the stars...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let outcome = controller.submit(&text).await;
                spinner.finish_and_clear();

                match outcome {
                    SubmitOutcome::Ignored => continue,
                    // The loop never reads input while a turn is pending, so
                    // this arm is unreachable here; keep the fallthrough
                    // harmless anyway.
                    SubmitOutcome::Rejected => continue,
                    SubmitOutcome::Completed { turn_id } => {
                        info!(turn_id, "turn completed");
                        // The reply is the newest message in the sequence.
                        if let Some(reply) = controller.messages().last().filter(|m| m.ai) {
                            println!(
                                "  {} {}",
                                style("Jyoti >").cyan().bold(),
                                reply.text.trim()
                            );
                            println!();
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
