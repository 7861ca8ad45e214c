//! Job board in the terminal.
//!
//! Loads every job from the API at `API_URL`, renders the five status columns,
//! and drives adds, edits, moves and deletes from a menu.

mod actions;
mod context;
mod render;

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::Select;
use job_board::{Board, Config, HttpJobService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use context::TerminalPrompter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,job_board=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "Starting job board");

    let service = Arc::new(HttpJobService::from_config(&config)?);
    let board = Board::new(service, Arc::new(TerminalPrompter::new()));

    let term = Term::stdout();
    print_banner(&term)?;

    render::status_indicator(&board.loader().state());
    let state = board.loader().start().await;
    if !state.is_ready() {
        render::status_indicator(&state);
        return Ok(());
    }

    loop {
        render::board(&board.store().snapshot());
        println!();

        let options = [
            "➕ Add job",
            "✏️  Edit job",
            "➡️  Move job",
            "🗑️  Delete job",
            "🔄 Refresh view",
            "🛑 Exit",
        ];

        let selection = Select::with_theme(&TerminalPrompter::theme())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => actions::add_job(&board).await?,
            1 => actions::edit_job(&board).await?,
            2 => actions::move_job(&board).await?,
            3 => actions::delete_job(&board).await?,
            4 => print_banner(&term)?,
            5 => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║          Job Application Board         ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
    Ok(())
}
