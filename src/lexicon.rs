// src/lexicon.rs
//! Lexicon: the static word/phrase tables and topic keyword groups.
//!
//! - `LexiconConfig` is the raw TOML schema (see `config/lexicon.toml`).
//! - `Lexicon` is the compiled, read-only form shared by every analysis.
//!
//! Compilation lowercases every entry, drops duplicates (first one wins),
//! cleans the negation markers (`...` removed, `'` turned into a space) and
//! precomputes the word lists with phrase entries excluded, so a phrase is
//! never counted a second time as a bag of single words.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::normalize::lowercase;

pub const DEFAULT_LEXICON_PATH: &str = "config/lexicon.toml";
pub const ENV_LEXICON_PATH: &str = "LEXICON_PATH";

const BUILTIN_LEXICON: &str = include_str!("../config/lexicon.toml");

static BUILTIN: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::from_toml_str(BUILTIN_LEXICON).expect("valid built-in lexicon"));

fn default_booster() -> String {
    "très".to_string()
}

/* ----------------------------
Config schema (from TOML)
---------------------------- */

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub positive_words: Vec<String>,
    #[serde(default)]
    pub neutral_words: Vec<String>,
    #[serde(default)]
    pub negative_words: Vec<String>,
    #[serde(default)]
    pub negation_markers: Vec<String>,
    pub amplifiers: Vec<String>,
    #[serde(default)]
    pub very_positive_words: Vec<String>,
    #[serde(default)]
    pub positive_phrases: Vec<String>,
    #[serde(default)]
    pub neutral_positive_phrases: Vec<String>,
    #[serde(default)]
    pub negative_phrases: Vec<String>,
    /// Amplifier whose mere presence adds the one-time positive bonus.
    #[serde(default = "default_booster")]
    pub booster: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// One topic label and its keyword group, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub label: String,
    pub keywords: Vec<String>,
}

/* ----------------------------
Compiled lexicon
---------------------------- */

#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) positive_words: Vec<String>,
    /// Positive words minus positive and neutral-positive phrases.
    pub(crate) scored_positive_words: Vec<String>,
    pub(crate) neutral_words: Vec<String>,
    pub(crate) negative_words: Vec<String>,
    /// Negative words minus negative phrases.
    pub(crate) scored_negative_words: Vec<String>,
    pub(crate) negation_markers: Vec<String>,
    pub(crate) amplifiers: Vec<String>,
    pub(crate) very_positive_words: Vec<String>,
    pub(crate) positive_phrases: Vec<String>,
    pub(crate) neutral_positive_phrases: Vec<String>,
    pub(crate) negative_phrases: Vec<String>,
    pub(crate) booster: String,
    pub(crate) topics: Vec<Topic>,
}

impl Lexicon {
    /// The embedded French lexicon, parsed once per process.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let cfg: LexiconConfig = toml::from_str(toml_str).context("parsing lexicon TOML")?;
        Self::compile(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("loading lexicon from {}", path.display()))
    }

    /// `$LEXICON_PATH` when set (must exist), otherwise the built-in lexicon.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(ENV_LEXICON_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// The file at `path` (must exist), or the built-in lexicon for `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin().clone());
        };
        if !path.exists() {
            bail!("lexicon path {} does not exist", path.display());
        }
        let lex = Self::from_path(path)?;
        info!(path = %path.display(), topics = lex.topics.len(), "custom lexicon loaded");
        Ok(lex)
    }

    pub fn compile(cfg: LexiconConfig) -> Result<Self> {
        let positive_words = clean_list("positive_words", cfg.positive_words)?;
        let neutral_words = clean_list("neutral_words", cfg.neutral_words)?;
        let negative_words = clean_list("negative_words", cfg.negative_words)?;
        let amplifiers = clean_list("amplifiers", cfg.amplifiers)?;
        let very_positive_words = clean_list("very_positive_words", cfg.very_positive_words)?;
        let positive_phrases = clean_list("positive_phrases", cfg.positive_phrases)?;
        let neutral_positive_phrases =
            clean_list("neutral_positive_phrases", cfg.neutral_positive_phrases)?;
        let negative_phrases = clean_list("negative_phrases", cfg.negative_phrases)?;

        if amplifiers.is_empty() {
            bail!("lexicon needs at least one amplifier");
        }

        let negation_markers = clean_list("negation_markers", cfg.negation_markers)?
            .into_iter()
            .map(|m| clean_negation(&m))
            .collect::<Vec<_>>();
        if negation_markers.iter().any(|m| m.trim().is_empty()) {
            bail!("negation marker is empty once cleaned");
        }

        let booster = lowercase(cfg.booster.trim());
        if booster.is_empty() {
            bail!("booster must not be empty");
        }

        let scored_positive_words = positive_words
            .iter()
            .filter(|w| !positive_phrases.contains(w) && !neutral_positive_phrases.contains(w))
            .cloned()
            .collect();
        let scored_negative_words = negative_words
            .iter()
            .filter(|w| !negative_phrases.contains(w))
            .cloned()
            .collect();

        let topics = compile_topics(cfg.topics)?;

        Ok(Self {
            positive_words,
            scored_positive_words,
            neutral_words,
            negative_words,
            scored_negative_words,
            negation_markers,
            amplifiers,
            very_positive_words,
            positive_phrases,
            neutral_positive_phrases,
            negative_phrases,
            booster,
            topics,
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_labels(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn amplifiers(&self) -> &[String] {
        &self.amplifiers
    }

    /// Negation markers as they are searched for (already cleaned).
    pub fn negation_markers(&self) -> &[String] {
        &self.negation_markers
    }

    /// Entry counts per table, for diagnostics.
    pub fn sizes(&self) -> LexiconSizes {
        LexiconSizes {
            positive_words: self.positive_words.len(),
            neutral_words: self.neutral_words.len(),
            negative_words: self.negative_words.len(),
            negation_markers: self.negation_markers.len(),
            amplifiers: self.amplifiers.len(),
            very_positive_words: self.very_positive_words.len(),
            positive_phrases: self.positive_phrases.len(),
            neutral_positive_phrases: self.neutral_positive_phrases.len(),
            negative_phrases: self.negative_phrases.len(),
            topics: self.topics.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LexiconSizes {
    pub positive_words: usize,
    pub neutral_words: usize,
    pub negative_words: usize,
    pub negation_markers: usize,
    pub amplifiers: usize,
    pub very_positive_words: usize,
    pub positive_phrases: usize,
    pub neutral_positive_phrases: usize,
    pub negative_phrases: usize,
    pub topics: usize,
}

impl LexiconSizes {
    /// `(table, entries)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, usize); 10] {
        [
            ("positive_words", self.positive_words),
            ("neutral_words", self.neutral_words),
            ("negative_words", self.negative_words),
            ("negation_markers", self.negation_markers),
            ("amplifiers", self.amplifiers),
            ("very_positive_words", self.very_positive_words),
            ("positive_phrases", self.positive_phrases),
            ("neutral_positive_phrases", self.neutral_positive_phrases),
            ("negative_phrases", self.negative_phrases),
            ("topics", self.topics),
        ]
    }
}

/// `ne...pas` → `nepas`, `pas d'` → `pas d `.
fn clean_negation(marker: &str) -> String {
    marker.replace("...", "").replace('\'', " ")
}

/// Trim + lowercase, reject empties, drop duplicates keeping first-seen order.
fn clean_list(name: &str, items: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for (i, it) in items.into_iter().enumerate() {
        let t = lowercase(it.trim());
        if t.is_empty() {
            return Err(anyhow!("{name}[{i}] is empty"));
        }
        if seen.insert(t.clone()) {
            out.push(t);
        }
    }
    Ok(out)
}

fn compile_topics(topics: Vec<Topic>) -> Result<Vec<Topic>> {
    let mut labels = HashSet::new();
    let mut out = Vec::with_capacity(topics.len());
    for t in topics {
        let label = t.label.trim().to_string();
        if label.is_empty() {
            bail!("topic label must not be empty");
        }
        if !labels.insert(label.clone()) {
            bail!("duplicate topic `{label}`");
        }
        let keywords = clean_list(&format!("topics.{label}.keywords"), t.keywords)?;
        if keywords.is_empty() {
            bail!("topic `{label}` has no keywords");
        }
        out.push(Topic { label, keywords });
    }
    Ok(out)
}
