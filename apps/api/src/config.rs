use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::render::profile::{StyleProfile, BUILTIN_PROFILES};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the headless-browser PDF renderer (Gotenberg-compatible).
    pub renderer_url: String,
    pub renderer_timeout: Duration,
    pub default_profile: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_profile = optional_env("DEFAULT_PROFILE", "classic");
        let default_profile = match StyleProfile::builtin(&default_profile) {
            Some(profile) => profile.name,
            None => bail!(
                "DEFAULT_PROFILE '{default_profile}' is not one of {}",
                BUILTIN_PROFILES.join(", ")
            ),
        };

        Ok(Config {
            renderer_url: require_env("RENDERER_URL")?,
            renderer_timeout: Duration::from_secs(
                optional_env("RENDERER_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("RENDERER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            default_profile,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
