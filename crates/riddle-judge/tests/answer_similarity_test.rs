use std::sync::Arc;

use riddle_core::config::{ProviderKind, RiddleConfig};
use riddle_core::errors::{EmbeddingError, RiddleResult};
use riddle_core::models::PuzzleInput;
use riddle_core::traits::IEmbeddingProvider;
use riddle_embeddings::EmbeddingEngine;
use riddle_judge::JudgeEngine;

const TRUTH: &str = "The bartender scared away his hiccups with a gun.";

fn config() -> RiddleConfig {
    let mut config = RiddleConfig::default();
    config.embedding.provider = ProviderKind::Hashing;
    config
}

fn engine() -> JudgeEngine {
    JudgeEngine::new(config()).unwrap()
}

#[test]
fn exact_and_empty_guesses() {
    let e = engine();
    assert_eq!(e.answer_similarity(TRUTH, TRUTH, None, None), 100);
    assert_eq!(e.answer_similarity(&TRUTH.to_uppercase(), TRUTH, None, None), 100);
    assert_eq!(e.answer_similarity("", TRUTH, None, None), 0);
    assert_eq!(e.answer_similarity("   ", TRUTH, None, None), 0);
    assert_eq!(e.answer_similarity("a guess", "", None, None), 0);
}

#[test]
fn reordered_truth_scores_high() {
    let e = engine();
    let score = e.answer_similarity(
        "With a gun, the bartender scared away his hiccups.",
        TRUTH,
        None,
        None,
    );
    assert!(score >= 90, "score {score}");
}

#[test]
fn unrelated_guess_scores_low() {
    let e = engine();
    let score = e.answer_similarity("She liked the color blue.", TRUTH, None, None);
    assert!(score < 30, "score {score}");
}

#[test]
fn opposite_guess_scores_below_partial_match() {
    let e = engine();
    let opposite = e.answer_similarity("He was alive.", "He was dead.", None, None);
    let partial = e.answer_similarity("The bartender had a gun.", TRUTH, None, None);
    assert!(opposite < partial, "opposite {opposite}, partial {partial}");
}

#[test]
fn puzzle_knowledge_can_be_supplied() {
    let e = engine();
    let puzzle = PuzzleInput::new("A man walks into a bar and asks for water.", TRUTH);
    let k = e.build_knowledge(&puzzle);
    let with_knowledge = e.answer_similarity(
        "With a gun, the bartender scared away his hiccups.",
        TRUTH,
        Some(&puzzle.content),
        Some(&k),
    );
    assert!(with_knowledge >= 80, "score {with_knowledge}");
}

#[test]
fn embedding_failure_falls_back_to_token_overlap() {
    let config = config();
    let embeddings = EmbeddingEngine::with_loader(
        config.embedding.clone(),
        Box::new(|| -> RiddleResult<Arc<dyn IEmbeddingProvider>> {
            Err(EmbeddingError::ProviderUnavailable {
                provider: "offline".into(),
            }
            .into())
        }),
    )
    .unwrap();
    let e = JudgeEngine::builder(config)
        .embeddings(Arc::new(embeddings))
        .build()
        .unwrap();

    assert_eq!(e.answer_similarity("gun bartender", "bartender gun", None, None), 100);
    assert_eq!(e.answer_similarity("rope ladder", "bartender gun", None, None), 0);
    assert_eq!(e.answer_similarity(TRUTH, TRUTH, None, None), 100);
}
