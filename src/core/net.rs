// src/core/net.rs

use std::error::Error;
use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Single blocking GET. One attempt, 10 s timeout, no retry.
/// Non-2xx responses are errors; the caller decides what an error means.
pub fn fetch(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: status {} for {}", status.as_u16(), url).into());
    }
    Ok(resp.text()?)
}
