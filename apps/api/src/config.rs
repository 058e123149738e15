use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no environment
/// at all. The comparison pipeline itself takes no configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory uploaded résumés are persisted under. Created at startup.
    pub storage_root: PathBuf,
    /// Lowercased file extensions accepted for upload.
    pub allowed_extensions: BTreeSet<String>,
    /// Upper bound on the multipart request body, in bytes.
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_root: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            allowed_extensions: parse_extensions(&env_or("ALLOWED_EXTENSIONS", "pdf")),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Whether a raw upload filename carries an allowed extension.
    /// Checked against the original filename, before sanitization.
    pub fn is_allowed_upload(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| self.allowed_extensions.contains(&ext.to_ascii_lowercase()))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_extensions(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
