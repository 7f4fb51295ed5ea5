// src/config/mod.rs
//! Runtime configuration for the HTTP surface, read from the environment
//! (`.env` is loaded by the binary before this runs).

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::lexicon::ENV_LEXICON_PATH;

pub const ENV_MIN_TEXT_CHARS: &str = "MIN_TEXT_CHARS";
pub const ENV_MAX_BATCH: &str = "MAX_BATCH";

pub const DEFAULT_MIN_TEXT_CHARS: usize = 10;
pub const DEFAULT_MAX_BATCH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shortest accepted review, in characters.
    pub min_text_chars: usize,
    /// Most texts accepted by one batch request.
    pub max_batch: usize,
    /// Custom lexicon file; `None` means the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_batch: DEFAULT_MAX_BATCH,
            lexicon_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            min_text_chars: parse_usize_env(ENV_MIN_TEXT_CHARS, DEFAULT_MIN_TEXT_CHARS),
            max_batch: parse_usize_env(ENV_MAX_BATCH, DEFAULT_MAX_BATCH).max(1),
            lexicon_path: env::var(ENV_LEXICON_PATH)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_usize_env(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, default, "invalid number, using default");
            default
        }),
        Err(_) => default,
    }
}
