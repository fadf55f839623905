use anyhow::Result;
use clap::Args;

use super::{open_repo, report};

pub const USAGE: &str = "Usage: minigit commit -m \"message\"";

#[derive(Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short = 'm')]
    message: Option<String>,
}

pub fn run(args: &CommitArgs) -> Result<i32> {
    let message = match &args.message {
        Some(message) => message,
        None => {
            println!("{USAGE}");
            return Ok(0);
        }
    };

    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    match repo.commit(message) {
        Ok(outcome) => {
            let mut out = String::from("Committed: ");
            for path in &outcome.changed {
                out.push_str("\n\t");
                out.push_str(path);
            }
            println!("{out}");
            Ok(0)
        }
        Err(e) => report(e),
    }
}
