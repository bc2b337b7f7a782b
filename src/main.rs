//! Interactive AVL tree shell.
//!
//! Reads one command per line from stdin and prints the result to stdout. Run with `--quiet` to
//! drop the menu and prompt when piping a script in:
//!
//! ```bash
//! printf 'insert 10\ninsert 20\ninsert 30\ngraph\n' | avl --quiet
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use avl::shell::{self, Command};
use avl::Tree;

/// Build and inspect an AVL tree of integers
#[derive(Parser, Debug)]
#[command(name = "avl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter to use when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Don't print the menu or the prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.quiet {
        write!(out, "{}", shell::MENU)?;
    }

    let mut tree = Tree::new();
    let mut lines = stdin.lock().lines();
    loop {
        if !cli.quiet {
            write!(out, "> ")?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line.context("failed to read a command from stdin")?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected command");
                eprintln!("{}", err);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let (next, reply) = shell::execute(tree, command);
        tree = next;
        if let Some(reply) = reply {
            writeln!(out, "{}", reply)?;
        }
    }

    Ok(())
}
