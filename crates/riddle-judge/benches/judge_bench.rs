use criterion::{criterion_group, criterion_main, Criterion};

use riddle_core::config::{ProviderKind, RiddleConfig};
use riddle_core::models::PuzzleInput;
use riddle_judge::JudgeEngine;

fn engine() -> JudgeEngine {
    let mut config = RiddleConfig::default();
    config.embedding.provider = ProviderKind::Hashing;
    JudgeEngine::new(config).unwrap()
}

fn locked_room() -> PuzzleInput {
    PuzzleInput::new(
        "A man is found dead in a locked room with a puddle of water and a broken chair.",
        "He stood on a block of ice to hang himself. The ice melted and left only water.",
    )
    .with_hints(vec!["Nobody else was ever in the room.".to_string()])
}

fn bench_build_knowledge(c: &mut Criterion) {
    let engine = engine();
    let puzzle = locked_room();
    c.bench_function("build_knowledge_locked_room", |b| {
        b.iter(|| engine.build_knowledge(&puzzle));
    });
}

fn bench_judge_v9(c: &mut Criterion) {
    let engine = engine();
    let knowledge = engine.build_knowledge(&locked_room());
    c.bench_function("judge_v9_warm_cache", |b| {
        b.iter(|| engine.judge_v9(&knowledge, "Did he stand on something that melted?"));
    });
}

fn bench_judge_v10(c: &mut Criterion) {
    let engine = engine();
    let knowledge = engine.build_knowledge(&locked_room());
    c.bench_function("judge_v10_warm_cache", |b| {
        b.iter(|| engine.judge_v10(&knowledge, "Was the water from the ice?"));
    });
}

criterion_group!(benches, bench_build_knowledge, bench_judge_v9, bench_judge_v10);
criterion_main!(benches);
