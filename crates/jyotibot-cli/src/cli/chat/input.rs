//! Prompt input for the chat loop.
//!
//! Owns the submission policy at the edge: lines are trimmed and blank
//! lines are swallowed here, so the loop only ever sees text worth opening
//! a turn for. Built on `rustyline_async` so replies can be printed without
//! clobbering the prompt.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// What the user did at the prompt.
#[derive(Debug)]
pub enum PromptEvent {
    /// A trimmed, non-empty line to submit as a turn.
    Submitted(String),
    /// Ctrl+D: end the session.
    Closed,
    /// Ctrl+C: stay in the session.
    Interrupted,
}

/// Reads submissions for the chat loop.
pub struct PromptReader {
    rl: Readline,
}

impl PromptReader {
    /// Create a reader showing `prompt`.
    ///
    /// Also returns a `SharedWriter` for printing output while the prompt
    /// is live.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Wait for the next submission, Ctrl+D, or Ctrl+C.
    ///
    /// Blank and whitespace-only lines never leave this method; the prompt
    /// is simply shown again.
    pub async fn next_event(&mut self) -> PromptEvent {
        loop {
            match self.rl.readline().await {
                Ok(ReadlineEvent::Line(line)) => {
                    let text = line.trim();
                    if text.is_empty() {
                        continue;
                    }
                    return PromptEvent::Submitted(text.to_string());
                }
                Ok(ReadlineEvent::Eof) => return PromptEvent::Closed,
                Ok(ReadlineEvent::Interrupted) => return PromptEvent::Interrupted,
                Err(_) => return PromptEvent::Closed,
            }
        }
    }
}
