use serde::Deserialize;
use std::fs;

fn default_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// URL the CSV is served from. Takes precedence over `csv_file`.
    pub csv_url: Option<String>,
    /// Path to a local CSV file, the user-supplied import path.
    pub csv_file: Option<String>,
    #[serde(default = "default_timeout")]
    pub fetch_timeout_seconds: u64,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
