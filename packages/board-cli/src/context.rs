//! Terminal dialogs handed to the board controllers

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};
use job_board::BasePrompter;

/// Blocking confirm/alert dialogs on the controlling terminal
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn theme() -> ColorfulTheme {
        ColorfulTheme::default()
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a terminal read from inside a controller call.
///
/// Dialogs hold the calling controller until answered. `block_in_place` moves
/// this worker's other tasks elsewhere in the multi-thread runtime while stdin
/// is read.
pub fn blocking<R>(f: impl FnOnce() -> R) -> R {
    tokio::task::block_in_place(f)
}

impl BasePrompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        let answer = blocking(|| {
            Confirm::with_theme(&Self::theme())
                .with_prompt(question)
                .default(false)
                .interact_on(&self.term)
        });
        match answer {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirm prompt failed; treating as no");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        println!();
        println!("{}", style(message).red().bold());
        println!("{}", style("Press Enter to continue").dim());
        if let Err(e) = blocking(|| self.term.read_line()) {
            tracing::warn!(error = %e, "Failed to wait for acknowledgement");
        }
    }
}
