use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use riddle_core::config::{KnowledgeConfig, SessionConfig};
use riddle_core::errors::{RiddleError, RiddleResult};
use riddle_core::models::{KnowledgeAugmentation, PuzzleInput};
use riddle_core::traits::IKnowledgeAugmenter;
use riddle_knowledge::selection::select_top_k;
use riddle_knowledge::{KnowledgeBuilder, KnowledgeCache, Locale};
use riddle_lexicon::Lexicon;

fn builder() -> KnowledgeBuilder {
    KnowledgeBuilder::new(KnowledgeConfig::default(), Arc::new(Lexicon::builtin()))
}

fn locked_room() -> PuzzleInput {
    PuzzleInput::new(
        "A man is found dead in a locked room with a puddle of water and a broken chair.",
        "He stood on a block of ice to hang himself; the ice melted.",
    )
}

#[test]
fn builds_sentences_tokens_and_entities() {
    let k = builder().build(&locked_room());
    assert!(!k.is_empty());
    assert_eq!(k.locale, Locale::English);
    assert_eq!(k.content_sentences.len(), 1);
    assert_eq!(k.answer_sentences.len(), 2);
    assert!(k.answer_tokens.contains(&"ice".to_string()));
    assert_eq!(k.entity_set.first().map(String::as_str), Some("ice"));
}

#[test]
fn infers_concepts_from_cooccurrence() {
    let k = builder().build(&locked_room());
    for concept in ["death", "suicide", "melting", "locked_room"] {
        assert!(k.inferred_concepts.contains(concept), "missing {concept}");
    }
    assert!(!k.inferred_concepts.contains("poisoning"));
}

#[test]
fn axes_active_only_with_both_poles() {
    let k = builder().build(&locked_room());
    assert!(k.antonym_axes.iter().all(|a| a.label != "alive/dead"));

    let k = builder().build(&PuzzleInput::new(
        "The man was alive when the doors closed.",
        "By morning he was dead.",
    ));
    assert!(k.antonym_axes.iter().any(|a| a.label == "alive/dead"));
}

#[test]
fn taxonomy_maps_cover_puzzle_tokens() {
    let k = builder().build(&PuzzleInput::new("A dog barked.", "He was bitten by a dog."));
    assert!(k.hypernyms_of("dog").contains(&"animal".to_string()));
    assert!(k.hyponyms_of("animal").contains(&"dog".to_string()));
}

#[test]
fn part_of_neighbours_come_from_puzzle_edges() {
    let k = builder().build(&locked_room());
    let around_room = k.part_neighbours("room");
    assert!(around_room.contains(&"house".to_string()));
    assert!(around_room.contains(&"door".to_string()));
    assert_eq!(k.part_neighbours("door"), vec!["room".to_string()]);
    assert!(k.part_neighbours("finger").is_empty());
}

#[test]
fn quantity_patterns_track_answer_singularity() {
    let k = builder().build(&PuzzleInput::new(
        "Two brothers went hiking.",
        "Only one of them came back.",
    ));
    assert!(k.quantity_patterns.answer_is_singular());
    assert!(k.quantity_patterns.totality.contains(&"both".to_string()));
}

#[test]
fn empty_puzzle_is_empty() {
    let k = builder().build(&PuzzleInput::new("  ", "\u{200B}"));
    assert!(k.is_empty());
    assert!(k.content_sentences.is_empty());
}

#[test]
fn korean_puzzle_detected_and_stemmed() {
    let k = builder().build(&PuzzleInput::new("남자가 방에서 죽었다.", "얼음이 녹았다."));
    assert_eq!(k.locale, Locale::Korean);
    assert!(k.answer_tokens.contains(&"얼음".to_string()));
    assert!(k.content_tokens.contains(&"죽".to_string()));
}

struct IceAugmenter;

impl IKnowledgeAugmenter for IceAugmenter {
    fn augment(&self, _content: &str, _answer: &str) -> RiddleResult<KnowledgeAugmentation> {
        Ok(KnowledgeAugmentation {
            synonyms: vec![("ice".into(), vec!["frozen water".into()])],
            taxonomy_edges: vec![("solid".into(), "ice".into())],
            concepts: vec!["Trick".into()],
        })
    }
}

struct FailingAugmenter;

impl IKnowledgeAugmenter for FailingAugmenter {
    fn augment(&self, _content: &str, _answer: &str) -> RiddleResult<KnowledgeAugmentation> {
        Err(RiddleError::ConfigError("augmenter offline".into()))
    }
}

#[test]
fn augmentation_is_merged() {
    let k = builder()
        .with_augmenter(Arc::new(IceAugmenter))
        .build(&locked_room());
    assert!(k.synonyms_of("ice").contains("frozen water"));
    assert!(k.synonyms_of("frozen water").contains("ice"));
    assert!(k.hypernyms_of("ice").contains(&"solid".to_string()));
    assert!(k.inferred_concepts.contains("trick"));
}

#[test]
fn failing_augmenter_is_ignored() {
    let k = builder()
        .with_augmenter(Arc::new(FailingAugmenter))
        .build(&locked_room());
    assert!(k.inferred_concepts.contains("suicide"));
}

#[test]
fn top_k_prefers_overlapping_sentences() {
    let k = builder().build(&PuzzleInput::new(
        "The lighthouse keeper slept. A ship crashed on the rocks. Nobody noticed the light was off.",
        "He turned off the light.",
    ));
    let question = k.tokenizer().tokenize("Did the ship crash on the rocks?");
    let top = select_top_k(&k, &question, &k.content_sentences, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].text, "A ship crashed on the rocks");
}

#[test]
fn korean_two_syllable_stem_earns_partial_credit() {
    let k = builder().build(&PuzzleInput::new("남자가 방에서 죽었다.", "얼음이 녹았다."));
    assert_eq!(k.locale, Locale::Korean);
    let top = select_top_k(&k, &["얼음물".to_string()], &k.answer_sentences, 1);
    // Half credit for the substring hit plus the short-sentence bonus.
    assert!((top[0].score - 0.7).abs() < 1e-9, "score {}", top[0].score);
}

#[test]
fn top_k_ties_keep_text_order() {
    let k = builder().build(&PuzzleInput::new("Alpha beta. Gamma delta. Epsilon zeta.", ""));
    let top = select_top_k(&k, &["omega".to_string()], &k.content_sentences, 2);
    assert_eq!(top[0].index, 0);
    assert_eq!(top[1].index, 1);
}

#[test]
fn concept_vectors_are_memoized() {
    let k = builder().build(&locked_room());
    let calls = AtomicUsize::new(0);
    for _ in 0..3 {
        let v = k
            .concept_vector("ice", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(vec![1.0, 0.0]))
            })
            .unwrap();
        assert_eq!(v.as_slice(), &[1.0, 0.0]);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(k.cached_concept_vectors(), 1);
}

#[test]
fn session_cache_builds_once_and_evicts() {
    let cache = KnowledgeCache::new(Arc::new(builder()), &SessionConfig::default());
    let first = cache.get_or_build("p1", &locked_room());
    let second = cache.get_or_build("p1", &PuzzleInput::new("ignored", "ignored"));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    cache.evict("p1");
    assert!(cache.get("p1").is_none());

    cache.get_or_build("p2", &locked_room());
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn session_cache_shares_concurrent_first_build() {
    let cache = Arc::new(KnowledgeCache::new(Arc::new(builder()), &SessionConfig::default()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            std::thread::spawn(move || cache.get_or_build("shared", &locked_room()))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}
