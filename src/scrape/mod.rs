// src/scrape/mod.rs
pub mod rankings;
