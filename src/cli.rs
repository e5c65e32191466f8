// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Params, Task};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;
    let mut progress = CliProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;
    logf!(
        "run complete: {} records, {} file(s) written",
        summary.records,
        summary.files_written.len()
    );
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                params.task = match v.to_ascii_lowercase().as_str() {
                    "rankings" => Task::Rankings,
                    "websites" => Task::Websites,
                    "guess" => Task::Guess,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };
            }
            "-o" | "--out-dir" => {
                params.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/* ---------------- CLI progress sink ---------------- */

/// Prints status lines as they come; tracks a done/failed tally for the
/// closing summary.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, _rank: u32, _name: &str) {
        self.done += 1;
    }

    fn item_failed(&mut self, _rank: u32, _name: &str) {
        self.failed += 1;
    }

    fn finish(&mut self) {
        if self.total > 0 {
            println!(
                "Finished: {} found, {} without a result (of {}).",
                self.done, self.failed, self.total
            );
        }
    }
}
