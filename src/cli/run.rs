//! Run, select and pick commands

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, spinner_style};
use crate::cli::{CliProgress, SpinnerProgress};
use anstream::println;
use cherry_batch::commit_list::{load_commit_list, save_commit_list};
use cherry_batch::error::Result;
use cherry_batch::pick::{PickSession, SessionEnd, run_pick_session};
use cherry_batch::prompt::OperatorPrompt;
use cherry_batch::select::select_commits;
use cherry_batch::types::{BranchQuery, CommitSequence, parse_branch_queries};
use indicatif::ProgressBar;
use std::time::Duration;

/// Prompt used when no `--branches` were given
pub const BRANCHES_PROMPT: &str = "Enter feature branches (comma separated)";

/// Select commits, write the commit list, then pick them
pub async fn run_all(
    ctx: &CommandContext,
    branches: Option<&str>,
    prompt: &dyn OperatorPrompt,
) -> Result<()> {
    let queries = read_queries(branches, prompt).await?;
    let sequence = select_and_save(ctx, &queries).await?;

    if sequence.is_empty() {
        println!("{}", "No matching commits found. Nothing to pick.".muted());
        return Ok(());
    }

    println!();
    pick_sequence(ctx, &sequence, prompt).await
}

/// Select commits and write the commit list without picking
pub async fn run_select(
    ctx: &CommandContext,
    branches: Option<&str>,
    prompt: &dyn OperatorPrompt,
) -> Result<()> {
    let queries = read_queries(branches, prompt).await?;
    let sequence = select_and_save(ctx, &queries).await?;

    for commit in &sequence {
        println!(
            "  {} {} {}",
            commit.short_hash().accent(),
            commit.timestamp.format("%Y-%m-%d %H:%M").to_string().muted(),
            commit.summary
        );
    }
    if !sequence.is_empty() {
        println!();
        println!(
            "{}",
            "Edit the list if needed, then run 'cherry-batch pick'.".muted()
        );
    }
    Ok(())
}

/// Pick the commits in an existing commit list
pub async fn run_pick(ctx: &CommandContext, prompt: &dyn OperatorPrompt) -> Result<()> {
    let sequence = load_commit_list(&ctx.commit_list_path)?;
    println!(
        "{} {} from {}",
        "Loaded".emphasis(),
        format!("{} commit(s)", sequence.len()).accent(),
        ctx.commit_list_path.display()
    );

    if sequence.is_empty() {
        println!("{}", "Commit list is empty. Nothing to pick.".muted());
        return Ok(());
    }

    println!();
    pick_sequence(ctx, &sequence, prompt).await
}

/// Parse `--branches`, or ask for them when absent
async fn read_queries(
    branches: Option<&str>,
    prompt: &dyn OperatorPrompt,
) -> Result<Vec<BranchQuery>> {
    let input = match branches {
        Some(b) => b.to_string(),
        None => prompt.ask(BRANCHES_PROMPT).await?,
    };
    Ok(parse_branch_queries(&input))
}

async fn select_and_save(ctx: &CommandContext, queries: &[BranchQuery]) -> Result<CommitSequence> {
    if queries.is_empty() {
        println!("{}", "No branches given.".muted());
        return Ok(Vec::new());
    }

    let names: Vec<&str> = queries.iter().map(BranchQuery::as_str).collect();
    println!(
        "{} {}",
        "Getting commits for feature branches:".emphasis(),
        names.join(", ").accent()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let progress = SpinnerProgress::new(spinner);

    let sequence = select_commits(queries, &ctx.git, &progress)
        .await
        .and_then(|sequence| save_commit_list(&ctx.commit_list_path, &sequence).map(|()| sequence))
        .inspect_err(|_| progress.spinner().finish_and_clear())?;

    progress.spinner().finish_with_message(format!(
        "{} Found {} → {}",
        check(),
        format!("{} commit(s)", sequence.len()).accent(),
        ctx.commit_list_path.display()
    ));

    Ok(sequence)
}

async fn pick_sequence(
    ctx: &CommandContext,
    sequence: &CommitSequence,
    prompt: &dyn OperatorPrompt,
) -> Result<()> {
    println!(
        "{} {}",
        "Cherry-picking".emphasis(),
        format!("{} commit(s) (no commit)...", sequence.len()).accent()
    );

    let progress = CliProgress;
    let session = run_pick_session(sequence, &ctx.git, prompt, &progress, ctx.pick_options).await?;

    print_session_summary(&session, sequence.len());
    Ok(())
}

fn print_session_summary(session: &PickSession, total: usize) {
    println!();
    match &session.end {
        SessionEnd::Completed if session.is_success() => {
            println!(
                "{} All {} commit(s) applied.",
                check(),
                total.accent()
            );
        }
        SessionEnd::Completed => {
            println!(
                "{} {} of {} commit(s) applied",
                "⚠️".warn(),
                session.applied_count().accent(),
                total
            );
        }
        SessionEnd::Cancelled { hash } => {
            let undone = if session.abort_restored() == Some(true) {
                "aborted"
            } else {
                "could not be undone; its conflicts are still in the working tree"
            };
            println!(
                "{} after {} of {} commit(s); cherry-pick of {} {undone}.",
                "Cancelled".warn(),
                session.applied_count().accent(),
                total,
                hash.accent()
            );
        }
    }

    for record in session.failed() {
        println!(
            "   {} {} {}",
            "Failed:".warn(),
            record.commit.short_hash(),
            record.outcome.muted()
        );
    }

    if session.applied_count() > 0 {
        println!(
            "{}",
            "   Changes are staged but not committed. Review, then commit.".muted()
        );
    }
}
