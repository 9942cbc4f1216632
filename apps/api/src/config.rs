use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::llm_client::DEFAULT_API_URL;
use crate::puzzle::filler::{Alphabet, ENGLISH_ALPHABET};
use crate::puzzle::generator::{PuzzleConfig, DEFAULT_WORD_COUNT};
use crate::puzzle::grid::DEFAULT_GRID_SIZE;
use crate::puzzle::packer::DEFAULT_MAX_TRIALS;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub port: u16,
    pub rust_log: String,
    pub grid_size: usize,
    pub word_count: usize,
    pub max_trials: usize,
    pub alphabet: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: require_env("GROQ_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            grid_size: env_or("PUZZLE_GRID_SIZE", DEFAULT_GRID_SIZE)?,
            word_count: env_or("PUZZLE_WORD_COUNT", DEFAULT_WORD_COUNT)?,
            max_trials: env_or("PUZZLE_MAX_TRIALS", DEFAULT_MAX_TRIALS)?,
            alphabet: std::env::var("PUZZLE_ALPHABET")
                .unwrap_or_else(|_| ENGLISH_ALPHABET.to_string()),
        })
    }

    /// Validated engine settings.
    pub fn puzzle_config(&self) -> Result<PuzzleConfig> {
        ensure!(self.grid_size >= 1, "PUZZLE_GRID_SIZE must be at least 1");
        ensure!(self.word_count >= 1, "PUZZLE_WORD_COUNT must be at least 1");
        ensure!(self.max_trials >= 1, "PUZZLE_MAX_TRIALS must be at least 1");
        let alphabet = Alphabet::new(&self.alphabet).context("PUZZLE_ALPHABET is invalid")?;

        Ok(PuzzleConfig {
            grid_size: self.grid_size,
            word_count: self.word_count,
            max_trials: self.max_trials,
            alphabet,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
