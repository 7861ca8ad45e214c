//! Menu actions: each turns terminal input into a controller call

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use job_board::{
    Board, DeleteOutcome, Editor, Job, JobDraft, JobStatus, MoveOutcome, SubmitOutcome,
};

use crate::context::{blocking, TerminalPrompter};
use crate::render::job_label;

pub async fn add_job(board: &Board) -> Result<()> {
    let mut editor = Editor::default();
    editor.open_add(JobStatus::Opportunities);
    submit(board, &mut editor).await
}

pub async fn edit_job(board: &Board) -> Result<()> {
    let Some(job) = pick_job(board, "Which job do you want to edit?")? else {
        return Ok(());
    };
    let mut editor = Editor::default();
    editor.open_edit(job);
    submit(board, &mut editor).await
}

pub async fn move_job(board: &Board) -> Result<()> {
    let Some(job) = pick_job(board, "Which job do you want to move?")? else {
        return Ok(());
    };

    let labels: Vec<&str> = JobStatus::ALL.iter().map(|s| s.label()).collect();
    let current = JobStatus::ALL
        .iter()
        .position(|s| *s == job.status)
        .unwrap_or(0);
    let selection = blocking(|| {
        Select::with_theme(&TerminalPrompter::theme())
            .with_prompt("Move to column")
            .items(&labels)
            .default(current)
            .interact()
    })?;

    let Some(event) = board.moves().move_to_end(&job.id, JobStatus::ALL[selection]) else {
        return Ok(());
    };
    match board.moves().handle_move(&event).await {
        MoveOutcome::Committed => println!("{}", style("Moved.").green()),
        MoveOutcome::Ignored => println!("{}", style("Nothing to move.").dim()),
        MoveOutcome::Reverted => {}
    }
    Ok(())
}

pub async fn delete_job(board: &Board) -> Result<()> {
    let Some(job) = pick_job(board, "Which job do you want to delete?")? else {
        return Ok(());
    };
    if board.mutations().delete(&job.id).await == DeleteOutcome::Deleted {
        println!("{}", style("Deleted.").green());
    }
    Ok(())
}

async fn submit(board: &Board, editor: &mut Editor) -> Result<()> {
    println!();
    println!("{}", style(editor.title()).bold());

    let draft = fill_draft(editor.draft())?;
    match board.mutations().submit(editor, &draft).await {
        SubmitOutcome::Created(job) | SubmitOutcome::Updated(job) => {
            println!("{} {}", style("Saved:").green(), job_label(&job));
        }
        SubmitOutcome::Failed | SubmitOutcome::NotOpen => {}
    }
    Ok(())
}

/// Prompt for every form field until title and company are filled in
fn fill_draft(mut draft: JobDraft) -> Result<JobDraft> {
    loop {
        draft.title = text("Job Title", &draft.title)?;
        draft.company = text("Company", &draft.company)?;
        draft.url = text("URL to Posting", &draft.url)?;
        draft.referral_info = text("Referral Info (if any)", &draft.referral_info)?;

        fill_links(&mut draft, text)?;

        match draft.validate() {
            Ok(()) => return Ok(draft),
            Err(e) => println!("{}", style(e).yellow()),
        }
    }
}

/// One input per hiring manager link. Existing links are offered for editing
/// (blank removes one), then new links are asked for until a blank answer.
fn fill_links(
    draft: &mut JobDraft,
    mut ask: impl FnMut(&str, &str) -> Result<String>,
) -> Result<()> {
    let mut index = 0;
    while index < draft.hiring_manager_links.len() {
        let current = draft.hiring_manager_links[index].clone();
        if current.trim().is_empty() {
            draft.remove_link(index);
            continue;
        }
        let answer = ask(&format!("Hiring Manager Link {}", index + 1), &current)?;
        if answer.trim().is_empty() {
            draft.remove_link(index);
        } else {
            draft.set_link(index, answer.trim());
            index += 1;
        }
    }

    loop {
        let prompt = format!(
            "Hiring Manager Link {} (leave blank to finish)",
            draft.hiring_manager_links.len() + 1
        );
        let answer = ask(&prompt, "")?;
        if answer.trim().is_empty() {
            return Ok(());
        }
        draft.add_link();
        draft.set_link(draft.hiring_manager_links.len() - 1, answer.trim());
    }
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    Ok(blocking(|| {
        Input::<String>::with_theme(&TerminalPrompter::theme())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
    })?)
}

fn pick_job(board: &Board, prompt: &str) -> Result<Option<Job>> {
    let snapshot = board.store().snapshot();
    if snapshot.is_empty() {
        println!("{}", style("No jobs on the board yet.").dim());
        return Ok(None);
    }

    // Column order, so the picker reads like the board
    let jobs: Vec<&Job> = snapshot
        .columns()
        .into_iter()
        .flat_map(|c| c.jobs)
        .collect();
    let labels: Vec<String> = jobs.iter().map(|j| job_label(j)).collect();

    let selection = blocking(|| {
        Select::with_theme(&TerminalPrompter::theme())
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
    })?;

    Ok(selection.map(|i| jobs[i].clone()))
}
