use anyhow::Result;
use clap::Args;

use super::{open_repo, report};

pub const USAGE: &str = "Usage: minigit revert <commit_id>";

#[derive(Args)]
pub struct RevertArgs {
    /// Commit to restore (must be reachable from the current head)
    commit_id: Option<String>,
}

pub fn run(args: &RevertArgs) -> Result<i32> {
    let commit_id = match &args.commit_id {
        Some(commit_id) => commit_id,
        None => {
            println!("{USAGE}");
            return Ok(0);
        }
    };

    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    match repo.revert(commit_id) {
        Ok(_) => Ok(0),
        Err(e) => report(e),
    }
}
