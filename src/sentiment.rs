// src/sentiment.rs
//! Output types of an analysis. The wire tokens (`positif`, `neutre`,
//! `négatif`) are what callers store and display, so they never change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "positif")]
    Positive,
    #[default]
    #[serde(rename = "neutre")]
    Neutral,
    #[serde(rename = "négatif")]
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positif",
            Sentiment::Neutral => "neutre",
            Sentiment::Negative => "négatif",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "positif" => Ok(Sentiment::Positive),
            "neutre" => Ok(Sentiment::Neutral),
            "négatif" => Ok(Sentiment::Negative),
            other => anyhow::bail!("unknown sentiment `{other}`"),
        }
    }
}

/// Result of one `analyze` call; owned by the caller afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Confidence score in `0..=100`; 50 is neutral.
    pub score: u8,
    /// Topic labels in lexicon order, no duplicates.
    pub topics: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score: 50,
            topics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tokens_are_stable() {
        let r = AnalysisResult {
            sentiment: Sentiment::Negative,
            score: 12,
            topics: vec!["prix".into()],
        };
        let j = serde_json::to_string(&r).unwrap();
        assert_eq!(j, r#"{"sentiment":"négatif","score":12,"topics":["prix"]}"#);
        let back: AnalysisResult = serde_json::from_str(&j).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn parse_and_display_agree() {
        for s in Sentiment::ALL {
            assert_eq!(s.to_string().parse::<Sentiment>().unwrap(), s);
        }
        assert!("positive".parse::<Sentiment>().is_err());
    }
}
