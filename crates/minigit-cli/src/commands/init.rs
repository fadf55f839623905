use anyhow::Result;
use clap::Args;
use minigit_repository::Repository;

use super::report;

#[derive(Args)]
pub struct InitArgs {}

pub fn run(_args: &InitArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    match Repository::init(cwd) {
        Ok(_) => Ok(0),
        Err(e) => report(e),
    }
}
