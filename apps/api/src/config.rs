use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Location of the resume PDF served by `/api/resume/download`.
    pub resume_path: PathBuf,
    /// Filename offered in the `Content-Disposition` header.
    pub resume_filename: String,
    /// Serve a placeholder payload when the resume file is missing.
    pub resume_placeholder: bool,
    /// When set, accepted contact messages are forwarded here.
    pub contact_webhook_url: Option<String>,
    pub contact_webhook_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            resume_path: PathBuf::from("assets/resume.pdf"),
            resume_filename: "resume.pdf".to_string(),
            resume_placeholder: true,
            contact_webhook_url: None,
            contact_webhook_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            resume_path: optional_env("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_path),
            resume_filename: optional_env("RESUME_FILENAME").unwrap_or(defaults.resume_filename),
            resume_placeholder: parse_env("RESUME_PLACEHOLDER", defaults.resume_placeholder)?,
            contact_webhook_url: optional_env("CONTACT_WEBHOOK_URL"),
            contact_webhook_timeout_secs: parse_env(
                "CONTACT_WEBHOOK_TIMEOUT_SECS",
                defaults.contact_webhook_timeout_secs,
            )?,
        })
    }
}

/// Reads `key`, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
