//! Interactive session: every typed command runs against the same store, so
//! jobs added in the admin panel show up in later listings.

use crate::{Command, run_command};
use anyhow::{Result, bail};
use clap::Parser;
use common::JobStore;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One line typed at the prompt, parsed like the command line minus `board`
#[derive(Parser)]
#[command(name = "board", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Runs one typed line against the store
pub fn run_line(store: &mut JobStore, line: &str) -> Result<Step> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Step::Continue);
    }
    if matches!(line, "quit" | "exit") {
        return Ok(Step::Quit);
    }

    let Some(words) = shlex::split(line) else {
        bail!("unbalanced quotes in: {}", line);
    };

    let parsed = match SessionLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Covers `help` and `--help` as well as real usage errors
            e.print()?;
            return Ok(Step::Continue);
        }
    };

    run_command(store, parsed.command)?;
    Ok(Step::Continue)
}

pub fn run(store: &mut JobStore) -> Result<()> {
    println!("🧭 Job Board session ({} jobs loaded)", store.list_jobs().len());
    println!("   Type help for commands, quit to exit\n");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("board> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match run_line(store, &line) {
                    Ok(Step::Quit) => break,
                    Ok(Step::Continue) => {}
                    Err(e) => eprintln!("❌ {:#}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type quit to exit");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("❌ {}", err);
                break;
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
