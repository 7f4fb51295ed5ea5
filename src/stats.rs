//! Review statistics: sentiment shares, average score and most frequent
//! topics over results the caller already holds. No storage involved.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::sentiment::{AnalysisResult, Sentiment};

/// How many topics `top_topics` reports at most.
pub const TOP_TOPICS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total_reviews: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub average_score: f64,
    pub top_topics: Vec<TopicCount>,
}

impl ReviewStats {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let total = results.len();
        if total == 0 {
            return Self::default();
        }

        let share = |s: Sentiment| {
            let n = results.iter().filter(|r| r.sentiment == s).count();
            round2(n as f64 / total as f64 * 100.0)
        };
        let score_sum: u64 = results.iter().map(|r| u64::from(r.score)).sum();

        Self {
            total_reviews: total,
            positive_percentage: share(Sentiment::Positive),
            negative_percentage: share(Sentiment::Negative),
            neutral_percentage: share(Sentiment::Neutral),
            average_score: round2(score_sum as f64 / total as f64),
            top_topics: top_topics(results, TOP_TOPICS),
        }
    }
}

/// Count per topic, descending; ties keep first-appearance order.
pub fn top_topics(results: &[AnalysisResult], limit: usize) -> Vec<TopicCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for topic in results.iter().flat_map(|r| r.topics.iter()) {
        let c = counts.entry(topic.as_str()).or_insert(0);
        if *c == 0 {
            order.push(topic.as_str());
        }
        *c += 1;
    }

    let mut out: Vec<TopicCount> = order
        .into_iter()
        .map(|t| TopicCount {
            topic: t.to_string(),
            count: counts[t],
        })
        .collect();
    // stable sort keeps first appearance among equals
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out.truncate(limit);
    out
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(sentiment: Sentiment, score: u8, topics: &[&str]) -> AnalysisResult {
        AnalysisResult {
            sentiment,
            score,
            topics: topics.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let s = ReviewStats::from_results(&[]);
        assert_eq!(s, ReviewStats::default());
        assert!(s.top_topics.is_empty());
    }

    #[test]
    fn shares_and_average_are_rounded() {
        let rs = vec![
            r(Sentiment::Positive, 90, &[]),
            r(Sentiment::Negative, 10, &[]),
            r(Sentiment::Neutral, 51, &[]),
        ];
        let s = ReviewStats::from_results(&rs);
        assert_eq!(s.total_reviews, 3);
        assert_eq!(s.positive_percentage, 33.33);
        assert_eq!(s.negative_percentage, 33.33);
        assert_eq!(s.neutral_percentage, 33.33);
        assert_eq!(s.average_score, 50.33);
    }

    #[test]
    fn top_topics_sorted_and_capped() {
        let rs = vec![
            r(Sentiment::Positive, 80, &["prix", "service"]),
            r(Sentiment::Positive, 80, &["service", "livraison"]),
            r(Sentiment::Negative, 20, &["qualité", "satisfaction", "livraison"]),
            r(Sentiment::Neutral, 50, &["service", "autre"]),
        ];
        let top = top_topics(&rs, 5);
        let names: Vec<&str> = top.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(
            names,
            vec!["service", "livraison", "prix", "qualité", "satisfaction"]
        );
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].count, 2);
    }
}
