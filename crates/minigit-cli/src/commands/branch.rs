use anyhow::Result;
use clap::Args;
use minigit_ref::BranchName;

use super::{open_repo, report};

pub const USAGE: &str = "Usage: minigit branch <branch name> OR minigit branch";

#[derive(Args)]
pub struct BranchArgs {
    /// Branch to create; lists all branches when omitted
    name: Option<String>,
}

pub fn run(args: &BranchArgs) -> Result<i32> {
    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };

    let name = match &args.name {
        None => {
            for branch in repo.list_branches()? {
                println!("{branch}");
            }
            return Ok(0);
        }
        Some(name) => name,
    };

    let name = match BranchName::new(name.as_str()) {
        Ok(name) => name,
        Err(_) => {
            println!("{USAGE}");
            return Ok(0);
        }
    };
    match repo.create_branch(&name) {
        Ok(()) => Ok(0),
        Err(e) => report(e),
    }
}
