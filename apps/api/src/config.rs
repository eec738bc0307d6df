use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// How cover letters are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Claude writes the letter; failures fall back to the template.
    Llm,
    /// Deterministic template only. No network calls.
    Template,
}

impl FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(GenerationMode::Llm),
            "template" => Ok(GenerationMode::Template),
            other => bail!("COVER_LETTER_MODE must be 'llm' or 'template', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub cover_letter_mode: GenerationMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        let cover_letter_mode = resolve_mode(
            optional_env("COVER_LETTER_MODE").as_deref(),
            anthropic_api_key.is_some(),
        )?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key,
            cover_letter_mode,
        })
    }
}

/// Explicit mode wins; otherwise `llm` when a key is configured.
fn resolve_mode(requested: Option<&str>, has_api_key: bool) -> Result<GenerationMode> {
    let mode = match requested {
        Some(value) => value.parse()?,
        None if has_api_key => GenerationMode::Llm,
        None => GenerationMode::Template,
    };
    if mode == GenerationMode::Llm && !has_api_key {
        bail!("COVER_LETTER_MODE=llm requires ANTHROPIC_API_KEY to be set");
    }
    Ok(mode)
}

/// Unset and blank variables are both `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
