//! Topic detector: first matching keyword per topic, lexicon order kept.

use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;

pub fn detect(text: &NormalizedText, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .topics
        .iter()
        .filter(|topic| topic.keywords.iter().any(|k| text.contains(k)))
        .map(|topic| topic.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(raw: &str) -> Vec<String> {
        detect(&NormalizedText::new(raw), Lexicon::builtin())
    }

    #[test]
    fn order_follows_lexicon_not_text() {
        assert_eq!(
            topics("Le prix est correct, la livraison aussi"),
            vec!["livraison", "prix"]
        );
    }

    #[test]
    fn one_label_per_topic() {
        assert_eq!(topics("colis livré, livraison et transport"), vec!["livraison"]);
    }

    #[test]
    fn nothing_found() {
        assert!(topics("").is_empty());
        assert!(topics("rien à signaler").is_empty());
    }

    #[test]
    fn keywords_match_inside_words() {
        // "note" inside "annotée"
        assert_eq!(topics("facture annotée"), vec!["satisfaction"]);
    }
}
