//! Board rendering

use colored::Colorize;
use job_board::{Column, Job, JobStore, LoadState};

/// Text shown instead of the board while loading or after a failed load
pub fn status_indicator(state: &LoadState) {
    if let Some(message) = state.message() {
        match state {
            LoadState::Error(_) => println!("{}", message.red().bold()),
            _ => println!("{}", message.dimmed()),
        }
    }
}

pub fn board(store: &JobStore) {
    for column in store.columns() {
        render_column(&column);
    }
}

fn render_column(column: &Column<'_>) {
    println!();
    println!("{}", column.header().bright_cyan().bold());
    if column.accepts_new() {
        println!("  {}", "+ Add new job".green());
    }
    for (index, job) in column.jobs.iter().enumerate() {
        render_card(index, job);
    }
}

fn render_card(index: usize, job: &Job) {
    println!("  {} {}", format!("[{}]", index + 1).dimmed(), job.title.bold());
    println!("      {}", job.company);

    if let Some(url) = job.posting_url() {
        println!("      View Posting: {}", url.underline());
    }
    if let Some(referral) = job.referral() {
        println!("      {}", format!("Referred by: {}", referral).yellow());
    }

    let links = job.hiring_manager_hrefs();
    if !links.is_empty() {
        println!("      {}", "Hiring Managers:".bold());
        for (i, href) in links.iter().enumerate() {
            println!("        Link {}: {}", i + 1, href);
        }
    }
}

/// One-line label for pickers
pub fn job_label(job: &Job) -> String {
    format!("{} @ {} [{}]", job.title, job.company, job.status)
}
