use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::{open_repo, report};

#[derive(Args)]
pub struct LogArgs {}

pub fn run(_args: &LogArgs) -> Result<i32> {
    let repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    let commits = match repo.history() {
        Ok(commits) => commits,
        Err(e) => return report(e),
    };

    // Empty history prints nothing; each block ends in a blank line and
    // the first has no leading newline.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for commit in commits {
        write!(
            out,
            "{}\n\ncommit {}\nAuthor: {}\nDate: {}\n\n",
            commit.message, commit.id, commit.author, commit.date
        )?;
    }
    out.flush()?;
    Ok(0)
}
