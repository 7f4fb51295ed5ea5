// tests/engine_properties.rs
//
// Behavioural checks of the public engine on short and realistic reviews.

use review_sentiment::{analyze, Sentiment, SentimentEngine};

#[test]
fn empty_and_blank_text_defaults() {
    for raw in ["", "   ", "\n\t", "?!..."] {
        let r = analyze(raw);
        assert_eq!(r.score, 50, "{raw:?}");
        assert_eq!(r.sentiment, Sentiment::Neutral, "{raw:?}");
        assert!(r.topics.is_empty(), "{raw:?}");
    }
}

#[test]
fn neutral_positive_phrase_alone() {
    let r = analyze("pas de problème");
    assert!(
        matches!(r.sentiment, Sentiment::Neutral | Sentiment::Positive),
        "{r:?}"
    );
    assert_eq!(r.score, 79, "{r:?}");
}

#[test]
fn accented_only_text_has_no_words() {
    // letters outside ASCII separate words, so "été" counts none
    let ex = SentimentEngine::builtin().explain("été");
    assert_eq!(ex.scoring.total_words, 0);
    assert_eq!(ex.result.score, 50);
}

#[test]
fn duplicate_lexicon_entries_count_once() {
    // "recommandé" is a single positive signal: neutral band
    let r = analyze("recommandé");
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.score, 90);
}

#[test]
fn single_very_positive_word_scores_above_neutral() {
    let r = analyze("parfait");
    assert!(r.score > 50 && r.score <= 95, "{r:?}");
    // one positive signal stays inside the classifier's neutral band
    assert_eq!(r.sentiment, Sentiment::Neutral);

    let r = analyze("parfait, génial");
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.score, 92);
}

#[test]
fn negation_turns_negative_word_positive() {
    let engine = SentimentEngine::builtin();
    let plain = engine.explain("problème");
    let negated = engine.explain("aucun problème");

    assert_eq!(plain.classifier.negative, 1);
    assert_eq!(negated.classifier.negative, 0);
    assert!(negated.classifier.positive > 0);
    assert_eq!(negated.result.sentiment, Sentiment::Positive);
    assert!(negated.result.score > plain.result.score);
    assert_eq!(negated.scoring.negative, 0.0);
}

#[test]
fn amplifier_lowers_negative_score() {
    let plain = analyze("le produit est mauvais");
    let amplified = analyze("le produit est très mauvais");
    assert_eq!(plain.score, 39);
    assert_eq!(amplified.score, 20);
    assert!(plain.score - amplified.score >= 15);
}

#[test]
fn amplified_short_text_hits_the_floor() {
    // both already sit on the floor, the penalty cannot go lower
    assert_eq!(analyze("mauvais").score, 5);
    assert_eq!(analyze("très mauvais").score, 5);
}

#[test]
fn repeated_calls_are_identical() {
    let text = "Très déçu : colis livré en retard, mais le service client était aimable.";
    let a = serde_json::to_vec(&analyze(text)).unwrap();
    let b = serde_json::to_vec(&analyze(text)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn topics_follow_lexicon_order() {
    let r = analyze("Le prix était bas et la livraison rapide");
    assert_eq!(r.topics, vec!["livraison", "prix"]);
}

#[test]
fn classifier_judges_first_occurrence_calculator_every_one() {
    let ex = SentimentEngine::builtin().explain("retard énorme. ensuite sans retard");
    // classifier: first "retard" is plain → one negative
    assert_eq!(ex.classifier.negative, 1);
    assert_eq!(ex.classifier.positive, 0);
    // calculator: second "retard" is negated → the whole word flips
    assert_eq!(ex.scoring.negative, 0.0);
    assert_eq!(ex.scoring.positive, 1.0);
    assert_eq!(ex.result.sentiment, Sentiment::Neutral);
    assert_eq!(ex.result.score, 61);
}

#[test]
fn negation_only_reaches_twenty_chars_back() {
    // "aucun" sits more than 20 characters before "retard": no flip.
    // The wider 100-char / 5-word negation lookup is not part of the engine.
    let ex = SentimentEngine::builtin().explain("aucun souci jusqu'ici mais ensuite retard");
    assert_eq!(ex.classifier.negative, 1);
    assert_eq!(ex.scoring.negative, 1.0);
    assert_eq!(ex.scoring.total_words, 6);
    assert_eq!(ex.result.score, 43);
}

#[test]
fn realistic_positive_review() {
    let r = analyze(
        "Excellent produit, livraison rapide et qualité au rendez-vous ! Je recommande vivement.",
    );
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.score, 70);
    assert_eq!(r.topics, vec!["livraison", "qualité"]);
}

#[test]
fn realistic_negative_review() {
    let r = analyze("Service client inexistant, produit défectueux. Je ne recommande pas.");
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.score, 14);
    assert_eq!(r.topics, vec!["qualité", "service"]);
}

#[test]
fn realistic_neutral_review_stays_near_fifty() {
    let r = analyze("Livraison correcte, produit standard. Pas de problème particulier.");
    assert_eq!(r.score, 56);
}

#[test]
fn case_does_not_matter() {
    let lower = analyze("service client déplorable, produit de mauvaise qualité.");
    let upper = analyze("SERVICE CLIENT DÉPLORABLE, PRODUIT DE MAUVAISE QUALITÉ.");
    assert_eq!(lower, upper);
}
