use anyhow::Result;
use clap::Args;
use minigit_ref::BranchName;
use minigit_repository::RepoError;

use super::{open_repo, report};

#[derive(Args)]
pub struct CheckoutArgs {
    /// Branch to switch to
    name: String,
}

pub fn run(args: &CheckoutArgs) -> Result<i32> {
    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };

    // A name that cannot be a branch cannot exist either.
    let name = match BranchName::new(args.name.as_str()) {
        Ok(name) => name,
        Err(_) => return report(RepoError::BranchDoesNotExist),
    };
    match repo.checkout(&name) {
        Ok(()) => Ok(0),
        Err(e) => report(e),
    }
}
