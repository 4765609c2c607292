use std::sync::{Arc, LazyLock};

use proptest::prelude::*;
use riddle_core::config::{ProviderKind, RiddleConfig};
use riddle_core::models::PuzzleInput;
use riddle_core::JudgeResult;
use riddle_judge::JudgeEngine;
use riddle_knowledge::ProblemKnowledge;

static ENGINE: LazyLock<JudgeEngine> = LazyLock::new(|| {
    let mut config = RiddleConfig::default();
    config.embedding.provider = ProviderKind::Hashing;
    JudgeEngine::new(config).unwrap()
});

const WORDS: &[&str] = &[
    "storm", "mountain", "brothers", "rope", "door", "morning", "water", "came", "back", "night",
    "trapped", "cabin", "snow", "fire", "walked", "home", "lost", "found", "river", "hungry",
];

fn brothers() -> Arc<ProblemKnowledge> {
    ENGINE.knowledge_for(
        "brothers",
        &PuzzleInput::new(
            "Two brothers went into the mountains. A storm trapped them overnight.",
            "Only one of them came back.",
        ),
    )
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn judging_is_repeatable(p in phrase()) {
        let k = brothers();
        let q = format!("Did the {p}?");
        prop_assert_eq!(ENGINE.judge_v9(&k, &q), ENGINE.judge_v9(&k, &q));
        prop_assert_eq!(ENGINE.judge_v10(&k, &q), ENGINE.judge_v10(&k, &q));
    }

    #[test]
    fn negation_inverts_yes_and_no_only(p in phrase()) {
        let k = brothers();
        let positive = ENGINE.judge_v9(&k, &format!("Did the {p}?"));
        let negative = ENGINE.judge_v9(&k, &format!("Didn't the {p}?"));
        prop_assert_eq!(negative, positive.invert_if(true));
    }

    #[test]
    fn totality_question_is_always_no(p in phrase()) {
        let k = brothers();
        prop_assert_eq!(ENGINE.judge_v9(&k, &format!("Did both {p}?")), JudgeResult::No);
        prop_assert_eq!(ENGINE.judge_v10(&k, &format!("Did all {p}?")).label, JudgeResult::No);
    }

    #[test]
    fn probabilities_form_a_distribution(p in phrase()) {
        let k = brothers();
        let r = ENGINE.judge_v10(&k, &format!("Was it the {p}?"));
        prop_assert!((r.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(r.features.values.iter().all(|v| v.is_finite()));
        prop_assert!((0.0..=1.0).contains(&r.confidence));
    }

    #[test]
    fn too_short_input_is_irrelevant(s in "\\PC{0,1}") {
        let k = brothers();
        prop_assert_eq!(ENGINE.judge_v9(&k, &s), JudgeResult::Irrelevant);
    }
}
