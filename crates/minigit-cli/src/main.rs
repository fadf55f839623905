mod commands;

use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use commands::Commands;

#[derive(Parser)]
#[command(name = "minigit", about = "A local, single-user version control system")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Misusing a known verb prints its contractual usage string to
            // stdout and exits 0; help and version requests keep clap's
            // behavior.
            let is_misuse =
                !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            if is_misuse {
                let verb = std::env::args().nth(1);
                if let Some(usage) = verb.as_deref().and_then(commands::usage_for) {
                    println!("{usage}");
                    process::exit(0);
                }
            }
            err.exit()
        }
    };

    match commands::run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(1);
        }
    }
}
