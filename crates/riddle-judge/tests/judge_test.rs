//! End-to-end judging with the deterministic hashing provider.
//!
//! The hashing provider only sees surface terms, so most scenarios here are
//! decided by force rules, contradiction detectors, and lexical overlap. The
//! locked-room cases at the end use a scripted topic provider to stand in
//! for paraphrase similarity.

use std::sync::Arc;

use riddle_core::config::{JudgeStrategy, ProviderKind, RiddleConfig};
use riddle_core::errors::{EmbeddingError, RiddleResult};
use riddle_core::models::PuzzleInput;
use riddle_core::traits::IEmbeddingProvider;
use riddle_core::JudgeResult;
use riddle_embeddings::EmbeddingEngine;
use riddle_judge::v10::HardGuard;
use riddle_judge::{DecisionPath, IQuestionJudge, JudgeEngine};

fn config() -> RiddleConfig {
    let mut config = RiddleConfig::default();
    config.embedding.provider = ProviderKind::Hashing;
    config.embedding.dimensions = 384;
    config
}

fn engine() -> JudgeEngine {
    JudgeEngine::new(config()).unwrap()
}

fn broken_engine() -> JudgeEngine {
    let config = config();
    let embeddings = EmbeddingEngine::with_loader(
        config.embedding.clone(),
        Box::new(|| -> RiddleResult<Arc<dyn IEmbeddingProvider>> {
            Err(EmbeddingError::ModelLoadFailed {
                path: "missing.onnx".into(),
                reason: "not found".into(),
            }
            .into())
        }),
    )
    .unwrap();
    JudgeEngine::builder(config)
        .embeddings(Arc::new(embeddings))
        .build()
        .unwrap()
}

fn brothers() -> PuzzleInput {
    PuzzleInput::new(
        "Two brothers went into the mountains. A storm trapped them overnight.",
        "Only one of them came back.",
    )
}

fn night_watch() -> PuzzleInput {
    PuzzleInput::new("The man was alive when the doors closed.", "By morning he was dead.")
}

fn bartender() -> PuzzleInput {
    PuzzleInput::new(
        "A man walks into a bar and asks for water.",
        "The bartender pulled out a gun to scare away his hiccups.",
    )
}

#[test]
fn unrelated_wh_question_is_irrelevant() {
    let e = engine();
    let k = e.build_knowledge(&brothers());
    assert_eq!(e.judge_v9(&k, "What did they eat for breakfast?"), JudgeResult::Irrelevant);
}

#[test]
fn breakfast_in_the_locked_room_is_irrelevant() {
    let e = engine();
    let k = e.build_knowledge(&PuzzleInput::new(
        "A man is found dead in a locked room with a puddle of water and a broken chair.",
        "He stood on a block of ice to hang himself; the ice melted.",
    ));
    assert_eq!(e.judge_v9(&k, "What did he eat for breakfast?"), JudgeResult::Irrelevant);
}

#[test]
fn restating_the_truth_is_at_least_yes() {
    let e = engine();
    let k = e.build_knowledge(&bartender());
    let q = "The bartender pulled out a gun to scare away his hiccups?";
    let outcome = e.try_v9(&k, q).unwrap();
    assert!(
        matches!(outcome.label, JudgeResult::Yes | JudgeResult::Decisive),
        "got {:?}",
        outcome
    );
    assert!(outcome.answer_score > outcome.content_score);
}

#[test]
fn totality_against_single_survivor_is_no() {
    let e = engine();
    let k = e.build_knowledge(&brothers());
    let outcome = e.try_v9(&k, "Did both brothers come back?").unwrap();
    assert_eq!(outcome.label, JudgeResult::No);
    assert_eq!(outcome.decision.path, DecisionPath::QuantityForce);

    assert_eq!(e.judge_v9(&k, "Didn't both brothers come back?"), JudgeResult::Yes);
    // Asking about the singular case is not a mismatch.
    let outcome = e.try_v9(&k, "Did only one brother come back?").unwrap();
    assert_ne!(outcome.decision.path, DecisionPath::QuantityForce);
}

#[test]
fn antonym_contradiction_never_answers_yes() {
    let e = engine();
    let k = e.build_knowledge(&night_watch());
    assert_eq!(e.judge_v9(&k, "Was he alive in the morning?"), JudgeResult::No);
    assert_eq!(e.judge_v9(&k, "Wasn't he alive in the morning?"), JudgeResult::Yes);
}

#[test]
fn hedged_category_question_is_forced_no() {
    let e = engine();
    let k = e.build_knowledge(&PuzzleInput::new(
        "A jogger came home with a torn sleeve.",
        "He was bitten by a dog.",
    ));
    let outcome = e.try_v9(&k, "Was it some kind of animal?").unwrap();
    assert_eq!(outcome.label, JudgeResult::No);
    assert_eq!(outcome.decision.path, DecisionPath::TaxonomyForce);
}

#[test]
fn malformed_questions_are_irrelevant() {
    let e = engine();
    let k = e.build_knowledge(&brothers());
    let long = "x".repeat(501);
    for q in ["", "?", "   ", long.as_str()] {
        assert_eq!(e.judge_v9(&k, q), JudgeResult::Irrelevant, "question {q:?}");
        assert_eq!(e.judge_v10(&k, q).label, JudgeResult::Irrelevant);
    }
}

#[test]
fn empty_puzzle_answers_irrelevant() {
    let e = engine();
    let k = e.build_knowledge(&PuzzleInput::new("", ""));
    assert_eq!(e.judge_v9(&k, "Did both brothers come back?"), JudgeResult::Irrelevant);
    assert_eq!(e.judge_v10(&k, "Did both brothers come back?"), riddle_judge::V10Result::irrelevant());
}

#[test]
fn judging_is_deterministic() {
    let e = engine();
    let k = e.build_knowledge(&night_watch());
    let q = "Did the doors close before morning?";
    let first = e.try_v9(&k, q).unwrap();
    let second = e.try_v9(&k, q).unwrap();
    assert_eq!(first, second);

    e.clear_cache();
    assert_eq!(e.judge_v10(&k, q), e.judge_v10(&k, q));
}

#[test]
fn embedding_failure_degrades_to_irrelevant() {
    let e = broken_engine();
    let k = e.build_knowledge(&night_watch());
    assert_eq!(e.judge_v9(&k, "Did the doors close?"), JudgeResult::Irrelevant);
    assert_eq!(e.judge_v10(&k, "Did the doors close?").label, JudgeResult::Irrelevant);
}

#[test]
fn force_rules_do_not_need_the_model() {
    let e = broken_engine();
    let k = e.build_knowledge(&brothers());
    assert_eq!(e.judge_v9(&k, "Did both brothers come back?"), JudgeResult::No);
    assert!(!e.embeddings().is_loaded());
}

#[test]
fn strategy_selector_routes_to_learned_path() {
    let mut cfg = config();
    cfg.strategy = JudgeStrategy::Learned;
    let e = JudgeEngine::new(cfg).unwrap();
    let k = e.build_knowledge(&bartender());
    let q = "The bartender pulled out a gun to scare away his hiccups?";

    // No weights configured: uniform probabilities resolve to irrelevant.
    assert!(e.classifier().is_zero());
    assert_eq!(e.judge(&k, q), JudgeResult::Irrelevant);
    assert_ne!(e.judge_with(JudgeStrategy::Heuristic, &k, q), JudgeResult::Irrelevant);
}

#[test]
fn learned_path_applies_quantity_guard() {
    let e = engine();
    let k = e.build_knowledge(&brothers());

    let r = e.judge_v10(&k, "Did both brothers come back?");
    assert_eq!(r.label, JudgeResult::No);
    assert_eq!(r.confidence, 1.0);
    assert!(r.guards.contains(&HardGuard::QuantityMismatch));
    assert_eq!(r.baseline.label, JudgeResult::No);
    assert_eq!(r.baseline.path, DecisionPath::QuantityForce);
    assert_eq!(r.features.get("quantity_mismatch"), Some(1.0));
    assert_eq!(r.features.get("force_flag"), Some(1.0));

    let r = e.judge_v10(&k, "Didn't both brothers come back?");
    assert_eq!(r.label, JudgeResult::Yes);
    assert!(r.negated);
    assert_eq!(r.features.get("negation"), Some(1.0));
}

#[test]
fn learned_result_carries_similarities_and_probabilities() {
    let e = engine();
    let k = e.build_knowledge(&bartender());
    let r = e.judge_v10(&k, "The bartender pulled out a gun to scare away his hiccups?");

    assert!((r.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(r.similarities.answer_max > 0.99);
    assert!(r.similarities.pair_answer > 0.99);
    assert_eq!(r.features.get("answer_raw_max"), Some(r.similarities.answer_max));
    assert!(r.guards.is_empty());
    assert!(matches!(r.baseline.label, JudgeResult::Yes | JudgeResult::Decisive));
}

#[test]
fn sessions_reuse_knowledge_until_ended() {
    let e = engine();
    let first = e.knowledge_for("p1", &brothers());
    let again = e.knowledge_for("p1", &brothers());
    assert!(Arc::ptr_eq(&first, &again));

    e.end_session("p1");
    let rebuilt = e.knowledge_for("p1", &brothers());
    assert!(!Arc::ptr_eq(&first, &rebuilt));
}

#[test]
fn release_model_reloads_on_next_judgment() {
    let e = engine();
    let k = e.build_knowledge(&night_watch());
    e.judge_v9(&k, "Did the doors close?");
    assert_eq!(e.embeddings().load_count(), 1);

    e.release_model();
    e.clear_cache();
    e.judge_v9(&k, "Did the doors close?");
    assert_eq!(e.embeddings().load_count(), 2);
}

#[test]
fn learned_lexicon_from_config_is_merged() {
    let mut cfg = config();
    cfg.lexicon.learned_path = Some(
        test_fixtures::fixture_path(test_fixtures::LEARNED_LEXICON)
            .display()
            .to_string(),
    );
    let e = JudgeEngine::new(cfg).unwrap();
    assert!(e.lexicon().are_synonyms("lantern", "lamp"));
    assert!(e
        .lexicon()
        .taxonomy_edges()
        .contains(&("vehicle".to_string(), "tractor".to_string())));
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = config();
    cfg.thresholds.strong_mismatch_answer = 0.9;
    assert!(JudgeEngine::new(cfg).is_err());
}

/// Embeds text as weights over a handful of locked-room topics, so
/// paraphrases that share a topic land close together the way a sentence
/// model would place them.
struct LockedRoomTopics;

const TOPICS: &[(&[&str], f32)] = &[
    (&["ice", "melt", "stood", "stand"], 1.0),
    (&["hang", "himself"], 0.5),
    (&["room", "locked", "puddle", "chair", "water", "broken", "found"], 1.0),
    (&["weapon", "murder", "kill", "dead", "gun", "knife"], 1.0),
    (&["eat", "breakfast", "food"], 1.0),
];

impl IEmbeddingProvider for LockedRoomTopics {
    fn embed(&self, text: &str) -> RiddleResult<Vec<f32>> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let mut vector: Vec<f32> = TOPICS
            .iter()
            .map(|(stems, weight)| {
                let hit = words.iter().any(|w| stems.iter().any(|s| w.starts_with(s)));
                if hit {
                    *weight
                } else {
                    0.0
                }
            })
            .collect();
        // Shared component so no text embeds to the zero vector.
        vector.push(0.2);
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        TOPICS.len() + 1
    }

    fn name(&self) -> &str {
        "locked-room-topics"
    }
}

fn topic_engine() -> JudgeEngine {
    let mut config = config();
    config.embedding.dimensions = TOPICS.len() + 1;
    let embeddings =
        EmbeddingEngine::with_provider(config.embedding.clone(), Arc::new(LockedRoomTopics)).unwrap();
    JudgeEngine::builder(config)
        .embeddings(Arc::new(embeddings))
        .build()
        .unwrap()
}

fn locked_room() -> PuzzleInput {
    PuzzleInput::new(
        "A man is found dead in a locked room with a puddle of water and a broken chair.",
        "He stood on a block of ice to hang himself; the ice melted.",
    )
}

#[test]
fn locked_room_weapon_matches_the_scene_not_the_truth() {
    let e = topic_engine();
    let k = e.build_knowledge(&locked_room());
    let outcome = e.try_v9(&k, "Did he use a weapon?").unwrap();
    assert_eq!(outcome.label, JudgeResult::No);
    assert!(outcome.content_score > outcome.answer_score);
    assert!(outcome.answer_score <= e.config().thresholds.no_answer_max);
}

#[test]
fn locked_room_murder_by_someone_else_is_no() {
    let e = topic_engine();
    let k = e.build_knowledge(&locked_room());
    assert_eq!(e.judge_v9(&k, "Was he murdered by someone else?"), JudgeResult::No);
}

#[test]
fn locked_room_melting_platform_is_confirmed() {
    let e = topic_engine();
    let k = e.build_knowledge(&locked_room());
    let outcome = e.try_v9(&k, "Did he stand on something that melted?").unwrap();
    assert!(
        matches!(outcome.label, JudgeResult::Yes | JudgeResult::Decisive),
        "got {:?} via {:?}",
        outcome.label,
        outcome.decision.path
    );
    assert!(outcome.answer_score >= e.config().thresholds.yes_answer);
    assert!(outcome.answer_score > outcome.content_score);
}

#[test]
fn locked_room_breakfast_is_irrelevant_with_a_sentence_model() {
    let e = topic_engine();
    let k = e.build_knowledge(&locked_room());
    assert_eq!(e.judge_v9(&k, "What did he eat for breakfast?"), JudgeResult::Irrelevant);
}
