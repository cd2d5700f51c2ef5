use anyhow::{Context, Result};

use crate::render::PageSize;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Paper size used by the preview wrapper and by print exports without `?page=`.
    pub page_size: PageSize,
    /// Request body limit. Profile photos and attachments arrive inline as data URIs.
    pub max_body_bytes: usize,
    /// Template id the sample document is seeded with.
    pub default_template: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            page_size: env_or("PAGE_SIZE", "letter")
                .parse::<PageSize>()
                .map_err(anyhow::Error::msg)
                .context("PAGE_SIZE must be 'letter' or 'a4'")?,
            max_body_bytes: env_or("MAX_BODY_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a byte count")?,
            default_template: env_or("DEFAULT_TEMPLATE", "modern"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
