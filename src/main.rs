//! cherry-batch - bulk cherry-pick feature branch commits

mod cli;

use anstream::eprintln;
use anyhow::Context;
use cherry_batch::config::load_default_config;
use cherry_batch::prompt::TerminalPrompt;
use cherry_batch::types::{FailurePolicy, MatchMode};
use clap::{Parser, Subcommand};
use cli::context::{CommandContext, Overrides};
use cli::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bulk cherry-pick the commits of named feature branches, pausing on conflicts
#[derive(Parser, Debug)]
#[command(name = "cherry-batch", version, about)]
struct Cli {
    /// Path to the repository
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    /// Comma-separated branch names to search for (prompted when omitted)
    #[arg(long, short, global = true)]
    branches: Option<String>,

    /// Location of the ordered commit list
    #[arg(long, global = true)]
    list: Option<PathBuf>,

    /// What to do when a pick fails without conflicts
    #[arg(long, global = true, value_enum)]
    on_failure: Option<FailurePolicy>,

    /// How branch names are matched against commit messages
    #[arg(long, global = true, value_enum)]
    match_mode: Option<MatchMode>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select commits, write the commit list, then cherry-pick them (default)
    Run,
    /// Select commits and write the commit list without picking
    Select,
    /// Cherry-pick the commits in an existing commit list
    Pick,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cherry_batch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_default_config().context("failed to load configuration")?;
    let overrides = Overrides {
        commit_list: cli.list,
        failure_policy: cli.on_failure,
        match_mode: cli.match_mode,
    };
    let ctx = CommandContext::new(&cli.path, config, overrides).await?;
    let prompt = TerminalPrompt;
    let branches = cli.branches.as_deref();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cli::run::run_all(&ctx, branches, &prompt).await?,
        Commands::Select => cli::run::run_select(&ctx, branches, &prompt).await?,
        Commands::Pick => cli::run::run_pick(&ctx, &prompt).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
