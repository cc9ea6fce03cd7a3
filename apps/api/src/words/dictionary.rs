//! Reference dictionary offered to the suggestion scorer.
//!
//! Static for the lifetime of the process: either the built-in list or a word
//! file named by `DICTIONARY_PATH`, loaded once at startup.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::words::sanitize::normalize_list;

const BUILTIN_WORDS: &[&str] = &[
    "FAMILY", "LOVE", "HOME", "HAPPY", "SMILE", "DREAM", "PEACE", "CHILL", "CREATE", "EXPLORE",
    "ADVENTURE", "RELAX", "TINO", "MAMA", "PAPA", "DAD", "MOM", "HERZ", "GLUECK", "FREUDE",
    "REISE", "SONNE", "NATUR", "KREATIV", "PLA", "PRINT", "DRUCK", "DESIGN", "MAKER", "POWER",
    "TEAM", "WEEKEND", "PARTY", "COFFEE", "MUSIC", "MOVIE", "GAMING", "TOOLS", "HOUSE", "GARDEN",
    "KITCHEN", "OFFICE", "IDEA", "SMART", "FOCUS", "BALANCE", "ENERGY",
];

/// Sanitized, de-duplicated candidate words in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from raw entries; each goes through the same
    /// sanitization as user input.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize_list(entries),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS.iter().copied())
    }

    /// Parses a word file: one word per line, blank lines and `#` comments skipped.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file '{}'", path.display()))?;
        let dictionary = Self::parse(&contents);
        info!(
            path = %path.display(),
            words = dictionary.len(),
            "Loaded reference dictionary"
        );
        Ok(dictionary)
    }

    /// Loads `path` when given, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
