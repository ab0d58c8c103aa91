use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SEED_FILE: &str = "data/profile-data.json";

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Deployment environment name. Only shown in the startup banner and `/health`.
    pub app_env: String,
    pub rust_log: String,
    pub seed_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_file: std::env::var("SEED_FILE")
                .unwrap_or_else(|_| DEFAULT_SEED_FILE.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(s) => s
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number"),
    }
}
