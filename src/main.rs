// src/main.rs
use cr_scrape::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        return Err(color_eyre::eyre::eyre!("{e}"));
    }
    Ok(())
}
