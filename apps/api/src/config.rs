use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::layout::DEFAULT_GRID_SIZE;

/// Smallest grid that still leaves a usable fallback row.
const MIN_GRID_SIZE: usize = 3;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Side length N of every grid built by this process.
    pub grid_size: usize,
    /// Upper bound on words accepted in a single request.
    pub max_words: usize,
    /// Optional word file replacing the built-in reference dictionary.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            grid_size: DEFAULT_GRID_SIZE,
            max_words: 200,
            dictionary_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let grid_size = parse_or(&lookup, "GRID_SIZE", defaults.grid_size)?;
        if grid_size < MIN_GRID_SIZE {
            bail!("GRID_SIZE must be at least {MIN_GRID_SIZE}, got {grid_size}");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            grid_size,
            max_words: parse_or(&lookup, "MAX_WORDS", defaults.max_words)?,
            dictionary_path: lookup("DICTIONARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
