// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Fetch the rankings page and write colleges.csv / colleges.json.
    Rankings,
    /// Visit every school's detail page in a browser to read its website link.
    Websites,
    /// Fill empty website fields from the name-to-domain heuristic.
    Guess,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub task: Task,
    /// Directory the fixed-name output files live in.
    pub out_dir: PathBuf,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            task: Task::Rankings,
            out_dir: PathBuf::from("."),
        }
    }
}
