use anyhow::Result;
use clap::Args;

use super::{open_repo, report};

pub const USAGE: &str = "Usage: minigit add <file1> <file2> <file3>";

#[derive(Args)]
pub struct AddArgs {
    /// Files to stage
    files: Vec<String>,
}

pub fn run(args: &AddArgs) -> Result<i32> {
    if args.files.is_empty() {
        println!("{USAGE}");
        return Ok(0);
    }

    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    match repo.add(&args.files) {
        Ok(added) => {
            for path in added {
                println!("Added {path}");
            }
            Ok(0)
        }
        Err(e) => report(e),
    }
}
