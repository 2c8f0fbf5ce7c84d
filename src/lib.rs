//! NCAA team statistics scraper
//!
//! Fetches paginated team stat tables from the NCAA stats site and merges
//! them into a single team-level table written as CSV.

pub mod catalog;
pub mod scrape;
pub mod table;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide errors
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub sport: String,
    pub division: String,
    pub season: String,
    pub workers: usize,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub team_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scrape: ScrapeConfig {
                base_url: "https://www.ncaa.com/stats".to_string(),
                sport: "soccer-women".to_string(),
                division: "d1".to_string(),
                season: "current".to_string(),
                workers: 6,
                user_agent: "Mozilla/5.0".to_string(),
                timeout_secs: 30,
            },
            output: OutputConfig {
                directory: "ncaa_stats".to_string(),
                team_file: "team_master.csv".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| StatsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StatsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ScrapeConfig {
    /// First-page URL for a stat; later pages append `/p<N>`.
    pub fn stat_url(&self, site_id: u32) -> String {
        format!(
            "{}/{}/{}/{}/team/{}",
            self.base_url, self.sport, self.division, self.season, site_id
        )
    }
}
