//! Fetching and parsing of NCAA stat pages
//!
//! One blocking HTTP client is shared across a fixed pool of worker
//! threads; each worker walks one stat's pagination and the main thread
//! merges the results.

pub mod extract;
pub mod page;
pub mod pool;
pub mod stat;

use crate::{Result, ScrapeConfig};

/// Build the shared HTTP client with a browser-like user agent.
pub fn build_client(config: &ScrapeConfig) -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
