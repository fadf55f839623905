use anyhow::Result;
use clap::Args;
use minigit_merge::MergeOutcome;
use minigit_ref::BranchName;
use minigit_repository::RepoError;

use super::{open_repo, report};

pub const USAGE: &str = "Usage: minigit merge <branch name>";

#[derive(Args)]
pub struct MergeArgs {
    /// Branch to merge into the current one
    branch: Option<String>,
}

pub fn run(args: &MergeArgs) -> Result<i32> {
    let name = match &args.branch {
        Some(name) => name,
        None => {
            println!("{USAGE}");
            return Ok(0);
        }
    };

    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    let branch = match BranchName::new(name.as_str()) {
        Ok(branch) => branch,
        Err(_) => return report(RepoError::NoSuchBranch(name.clone())),
    };
    let current = match repo.head_branch() {
        Ok(current) => current,
        Err(e) => return report(e),
    };

    match minigit_merge::merge(&mut repo, &branch) {
        Ok(MergeOutcome::AlreadyUpToDate) => {
            println!("Already up to date.");
            Ok(0)
        }
        Ok(MergeOutcome::FastForward { from, to }) => {
            println!("Fast-forward {from} to {to}");
            Ok(0)
        }
        Ok(MergeOutcome::Merged { .. }) => {
            println!("Auto-merge succeeded. Merged {branch} into {current}");
            Ok(0)
        }
        Ok(MergeOutcome::Conflicts { .. }) => {
            println!("Automerge failed. Fix conflicts and then commit the result.");
            Ok(0)
        }
        Err(e) => report(e),
    }
}
