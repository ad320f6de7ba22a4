use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the CSV of job postings (title, role category, required skills).
    pub job_data_path: String,
    /// Path to the JSON skill-frequency table; only its key set is used.
    pub skill_frequency_path: String,
    /// How many of the most frequent required skills form the required set.
    pub analysis_top_n: usize,
    /// Cap on role/title search results returned per query.
    pub search_result_limit: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            job_data_path: require_env("JOB_DATA_PATH")?,
            skill_frequency_path: require_env("SKILL_FREQUENCY_PATH")?,
            analysis_top_n: std::env::var("ANALYSIS_TOP_N")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("ANALYSIS_TOP_N must be a positive integer")?,
            search_result_limit: std::env::var("SEARCH_RESULT_LIMIT")
                .unwrap_or_else(|_| "15".to_string())
                .parse::<usize>()
                .context("SEARCH_RESULT_LIMIT must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
