// src/runner.rs
//
// Task orchestration. Each task loads what it needs, does its work with
// per-record failure isolation, and overwrites the output files whole.

use std::error::Error;
use std::path::PathBuf;

use crate::{
    browser::{self, Lookup},
    config::consts::{ENRICHED_CSV, ENRICHED_JSON, RANKINGS_CSV, RANKINGS_JSON},
    config::options::{Params, Task},
    guess,
    progress::{NullProgress, Progress},
    record::Website,
    scrape, store,
};

/// Summary of what a run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub records: usize,
}

/// Top-level runner: dispatch on task kind.
/// `progress` can be None (no output) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let p = progress.unwrap_or(&mut null);

    match params.task {
        Task::Rankings => run_rankings(params, p),
        Task::Websites => run_websites(params, p),
        Task::Guess => run_guess(params, p),
    }
}

/* ---------------- rankings ---------------- */

fn run_rankings(params: &Params, p: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    p.log("Fetching the rankings page...");

    // Fetch/HTTP failure degrades to an empty run, not a hard error.
    let records = match scrape::rankings::fetch() {
        Ok(records) => records,
        Err(e) => {
            loge!("rankings fetch failed: {e}");
            p.log(&format!("Error fetching page: {e}"));
            Vec::new()
        }
    };

    if records.is_empty() {
        p.log("No schools found. The page structure may have changed or may require JavaScript rendering.");
        return Ok(RunSummary { files_written: Vec::new(), records: 0 });
    }

    p.log(&format!("Found {} schools", records.len()));
    p.log("First 5 schools:");
    for r in records.iter().take(5) {
        p.log(&format!("  #{}: {}", r.rank, r.name));
        p.log(&format!("    Link: {}", r.link));
    }

    let csv_path = params.out_dir.join(RANKINGS_CSV);
    let json_path = params.out_dir.join(RANKINGS_JSON);
    store::save_rankings_csv(&csv_path, &records)?;
    p.log(&format!("Data saved to {}", csv_path.display()));
    store::save_rankings_json(&json_path, &records)?;
    p.log(&format!("Data saved to {}", json_path.display()));

    Ok(RunSummary { files_written: vec![csv_path, json_path], records: records.len() })
}

/* ---------------- websites (browser pass) ---------------- */

fn run_websites(params: &Params, p: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let enriched_csv = params.out_dir.join(ENRICHED_CSV);
    let rankings_csv = params.out_dir.join(RANKINGS_CSV);

    let (mut records, seed) = store::load_enrichment_seed(&enriched_csv, &rankings_csv)?;
    p.log(&format!("Loaded {} schools from {}", records.len(), seed.display()));

    let mut session = browser::Session::launch()?;
    let total = records.len();
    p.begin(total);

    for (idx, rec) in records.iter_mut().enumerate() {
        // A dead session is replaced, not locked around; one relaunch per
        // detection, and a failed relaunch aborts the run.
        if !session.is_alive() {
            p.log("Browser session died, restarting browser...");
            session = relaunch(session)?;
        }

        p.log(&format!("Visiting {}/{}: {}", idx + 1, total, rec.name));
        rec.website = match session.lookup_website(&rec.link) {
            Lookup::Found(url) => {
                p.log(&format!("  → Found: {url}"));
                p.item_done(rec.rank, &rec.name);
                Website::Url(url)
            }
            Lookup::Missing => {
                p.log("  → Not found");
                p.item_failed(rec.rank, &rec.name);
                Website::NotFound
            }
            Lookup::Failed => {
                p.log("  → Error loading page");
                p.item_failed(rec.rank, &rec.name);
                Website::Failed
            }
        };
    }

    session.close();
    p.finish();

    let json_path = params.out_dir.join(ENRICHED_JSON);
    store::save_enriched_csv(&enriched_csv, &records)?;
    p.log(&format!("Data saved to {}", enriched_csv.display()));
    store::save_enriched_json(&json_path, &records)?;
    p.log(&format!("Data saved to {}", json_path.display()));

    Ok(RunSummary { files_written: vec![enriched_csv, json_path], records: records.len() })
}

fn relaunch(dead: browser::Session) -> Result<browser::Session, Box<dyn Error>> {
    dead.close();
    browser::Session::launch()
}

/* ---------------- guess (heuristic fill) ---------------- */

fn run_guess(params: &Params, p: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let enriched_csv = params.out_dir.join(ENRICHED_CSV);
    let rankings_csv = params.out_dir.join(RANKINGS_CSV);

    let (mut records, seed) = store::load_enrichment_seed(&enriched_csv, &rankings_csv)?;
    p.log(&format!("Loaded {} schools from {}", records.len(), seed.display()));
    p.log("Adding .edu URLs...");

    let mut filled = 0usize;
    for rec in records.iter_mut() {
        if !rec.website.is_unset() {
            continue;
        }
        let url = guess::construct_edu_url(&rec.name);
        p.log(&format!("{}. {}", rec.rank, rec.name));
        p.log(&format!("   → {url}"));
        rec.website = if url == "Unknown" { Website::Unknown } else { Website::Url(url) };
        filled += 1;
    }

    store::save_enriched_csv(&enriched_csv, &records)?;
    p.log(&format!(
        "Done! Updated {filled} of {} schools with website URLs.",
        records.len()
    ));

    Ok(RunSummary { files_written: vec![enriched_csv], records: records.len() })
}
