use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::{open_repo, report};

#[derive(Args)]
pub struct StatusArgs {}

pub fn run(_args: &StatusArgs) -> Result<i32> {
    let mut repo = match open_repo() {
        Ok(repo) => repo,
        Err(e) => return report(e),
    };
    let status = match repo.status() {
        Ok(status) => status,
        Err(e) => return report(e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "On branch {}", status.branch)?;
    if status.merge_in_progress {
        writeln!(
            out,
            "You have unmerged paths. Fix conflicts, stage to mark resolutions then commit."
        )?;
    }

    if status.is_empty() {
        writeln!(out, "Nothing to commit, working tree clean.")?;
        return Ok(0);
    }

    section(&mut out, "Changes to be committed:", &status.staged)?;
    section(&mut out, "Changes not staged for commit:", &status.modified)?;
    section(&mut out, "Untracked files:", &status.untracked)?;
    Ok(0)
}

fn section(out: &mut impl Write, header: &str, paths: &[String]) -> io::Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    writeln!(out, "{header}")?;
    for path in paths {
        writeln!(out, "\t{path}")?;
    }
    Ok(())
}
