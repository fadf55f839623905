pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod revert;
pub mod status;

use anyhow::Result;
use clap::Subcommand;
use minigit_repository::{RepoError, Repository};

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty MiniGit repository in the current directory
    Init(init::InitArgs),
    /// Show the working tree status
    Status(status::StatusArgs),
    /// Stage file contents for the next commit
    Add(add::AddArgs),
    /// Record the staged snapshot as a new commit
    Commit(commit::CommitArgs),
    /// Show commit history, newest first
    Log(log::LogArgs),
    /// List branches, or create a new one at the current head
    Branch(branch::BranchArgs),
    /// Switch branches
    Checkout(checkout::CheckoutArgs),
    /// Restore an earlier commit's snapshot as a new commit
    Revert(revert::RevertArgs),
    /// Join another branch's history into the current one
    Merge(merge::MergeArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init(args) => init::run(&args),
        Commands::Status(args) => status::run(&args),
        Commands::Add(args) => add::run(&args),
        Commands::Commit(args) => commit::run(&args),
        Commands::Log(args) => log::run(&args),
        Commands::Branch(args) => branch::run(&args),
        Commands::Checkout(args) => checkout::run(&args),
        Commands::Revert(args) => revert::run(&args),
        Commands::Merge(args) => merge::run(&args),
    }
}

/// The contractual usage string for a verb whose arguments failed to parse.
pub fn usage_for(verb: &str) -> Option<&'static str> {
    match verb {
        "add" => Some(add::USAGE),
        "commit" => Some(commit::USAGE),
        "branch" => Some(branch::USAGE),
        "revert" => Some(revert::USAGE),
        "merge" => Some(merge::USAGE),
        _ => None,
    }
}

/// Open the repository in the current working directory.
pub(crate) fn open_repo() -> Result<Repository, RepoError> {
    let cwd = std::env::current_dir()?;
    Repository::open(cwd)
}

/// Print a handled error to stdout and exit 0, or propagate an internal
/// fault (I/O, corruption) as fatal.
pub(crate) fn report(err: RepoError) -> Result<i32> {
    if err.is_user_error() {
        println!("{err}");
        Ok(0)
    } else {
        Err(err.into())
    }
}
