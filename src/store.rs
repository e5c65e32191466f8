// src/store.rs
//
// Durable form of a run: CSV + JSON, fixed filenames, fixed column sets.
// Writes are full overwrites. The sentinel string encoding lives entirely
// in this layer; the rest of the program sees the typed Website outcome.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::record::{SchoolRecord, Website};

/// Row shape of colleges.csv / colleges.json.
#[derive(Serialize)]
struct RankingsRow<'a> {
    rank: u32,
    name: &'a str,
    link: &'a str,
}

/// Row shape of colleges_selenium.csv / colleges_selenium.json.
#[derive(Serialize)]
struct EnrichedRow<'a> {
    rank: u32,
    name: &'a str,
    usnews_link: &'a str,
    school_website: &'a str,
}

#[derive(Deserialize)]
struct RankingsRowOwned {
    rank: u32,
    name: String,
    link: String,
}

#[derive(Deserialize)]
struct EnrichedRowOwned {
    rank: u32,
    name: String,
    usnews_link: String,
    #[serde(default)]
    school_website: String,
}

/* ---------------- Writing ---------------- */

pub fn save_rankings_csv(path: &Path, records: &[SchoolRecord]) -> Result<(), Box<dyn Error>> {
    let mut w = csv::Writer::from_path(path)?;
    for r in records {
        w.serialize(RankingsRow { rank: r.rank, name: &r.name, link: &r.link })?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_rankings_json(path: &Path, records: &[SchoolRecord]) -> Result<(), Box<dyn Error>> {
    let rows: Vec<RankingsRow<'_>> = records
        .iter()
        .map(|r| RankingsRow { rank: r.rank, name: &r.name, link: &r.link })
        .collect();
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, &rows)?;
    Ok(())
}

pub fn save_enriched_csv(path: &Path, records: &[SchoolRecord]) -> Result<(), Box<dyn Error>> {
    let mut w = csv::Writer::from_path(path)?;
    for r in records {
        w.serialize(EnrichedRow {
            rank: r.rank,
            name: &r.name,
            usnews_link: &r.link,
            school_website: r.website.as_field(),
        })?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_enriched_json(path: &Path, records: &[SchoolRecord]) -> Result<(), Box<dyn Error>> {
    let rows: Vec<EnrichedRow<'_>> = records
        .iter()
        .map(|r| EnrichedRow {
            rank: r.rank,
            name: &r.name,
            usnews_link: &r.link,
            school_website: r.website.as_field(),
        })
        .collect();
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, &rows)?;
    Ok(())
}

/* ---------------- Loading ---------------- */

pub fn load_rankings_csv(path: &Path) -> Result<Vec<SchoolRecord>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize::<RankingsRowOwned>() {
        let row = row?;
        out.push(SchoolRecord::new(row.rank, row.name, row.link));
    }
    Ok(out)
}

pub fn load_enriched_csv(path: &Path) -> Result<Vec<SchoolRecord>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize::<EnrichedRowOwned>() {
        let row = row?;
        out.push(SchoolRecord {
            rank: row.rank,
            name: row.name,
            link: row.usnews_link,
            website: Website::from_field(&row.school_website),
        });
    }
    Ok(out)
}

/* ---------------- Seed resolution ---------------- */

/// Records for the enrichment tasks: the enriched CSV from a prior run if
/// present, otherwise the plain rankings CSV (websites all unset).
pub fn load_enrichment_seed(
    enriched: &Path,
    rankings: &Path,
) -> Result<(Vec<SchoolRecord>, PathBuf), Box<dyn Error>> {
    if enriched.exists() {
        return Ok((load_enriched_csv(enriched)?, enriched.to_path_buf()));
    }
    if rankings.exists() {
        logf!(
            "{} not found; seeding from {}",
            enriched.display(),
            rankings.display()
        );
        return Ok((load_rankings_csv(rankings)?, rankings.to_path_buf()));
    }
    Err(format!(
        "neither {} nor {} exists; run the rankings task first",
        enriched.display(),
        rankings.display()
    )
    .into())
}
