//! Labeled-dataset evaluation: accuracy and a confusion matrix per strategy,
//! plus feature dumps for offline classifier training.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use riddle_core::config::JudgeStrategy;
use riddle_core::constants::LABEL_COUNT;
use riddle_core::errors::{RiddleError, RiddleResult};
use riddle_core::models::PuzzleInput;
use riddle_core::JudgeResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{IQuestionJudge, JudgeEngine};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledQuestion {
    pub question: String,
    pub expected: JudgeResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPuzzle {
    pub id: String,
    #[serde(flatten)]
    pub input: PuzzleInput,
    pub questions: Vec<LabeledQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub puzzles: Vec<LabeledPuzzle>,
}

impl Dataset {
    pub fn from_json(text: &str) -> RiddleResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RiddleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RiddleError::InvalidInput {
            reason: format!("cannot read dataset {}: {e}", path.display()),
        })?;
        Self::from_json(&text)
    }

    pub fn case_count(&self) -> usize {
        self.puzzles.iter().map(|p| p.questions.len()).sum()
    }
}

/// A case the judge got wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Miss {
    pub puzzle_id: String,
    pub question: String,
    pub expected: JudgeResult,
    pub actual: JudgeResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub strategy: JudgeStrategy,
    pub total: usize,
    pub correct: usize,
    /// `confusion[expected][actual]`, indexed like [`JudgeResult::ALL`].
    pub confusion: [[usize; LABEL_COUNT]; LABEL_COUNT],
    pub misses: Vec<Miss>,
}

impl EvaluationReport {
    fn new(strategy: JudgeStrategy) -> Self {
        Self {
            strategy,
            total: 0,
            correct: 0,
            confusion: [[0; LABEL_COUNT]; LABEL_COUNT],
            misses: Vec::new(),
        }
    }

    fn record(&mut self, puzzle_id: &str, question: &str, expected: JudgeResult, actual: JudgeResult) {
        self.total += 1;
        self.confusion[expected.index()][actual.index()] += 1;
        if expected == actual {
            self.correct += 1;
        } else {
            self.misses.push(Miss {
                puzzle_id: puzzle_id.to_string(),
                question: question.to_string(),
                expected,
                actual,
            });
        }
    }

    /// Zero for an empty dataset.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Share of cases labeled `label` that the judge also labeled `label`.
    pub fn recall(&self, label: JudgeResult) -> f64 {
        let row = &self.confusion[label.index()];
        let expected: usize = row.iter().sum();
        if expected == 0 {
            return 0.0;
        }
        row[label.index()] as f64 / expected as f64
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:?}: {}/{} correct ({:.1}%)",
            self.strategy,
            self.correct,
            self.total,
            self.accuracy() * 100.0
        )?;
        write!(f, "{:>12}", "expected\\got")?;
        for label in JudgeResult::ALL {
            write!(f, "{:>12}", label.as_str())?;
        }
        writeln!(f)?;
        for expected in JudgeResult::ALL {
            write!(f, "{:>12}", expected.as_str())?;
            for count in self.confusion[expected.index()] {
                write!(f, "{count:>12}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Judge every labeled question with `strategy`. Knowledge is built outside
/// the engine's session cache.
pub fn evaluate(engine: &JudgeEngine, dataset: &Dataset, strategy: JudgeStrategy) -> EvaluationReport {
    let mut report = EvaluationReport::new(strategy);
    for puzzle in &dataset.puzzles {
        let knowledge = engine.build_knowledge(&puzzle.input);
        for case in &puzzle.questions {
            let actual = engine.judge_with(strategy, &knowledge, &case.question);
            debug!(puzzle = %puzzle.id, question = %case.question, expected = %case.expected, %actual, "evaluated");
            report.record(&puzzle.id, &case.question, case.expected, actual);
        }
    }
    info!(
        strategy = ?strategy,
        total = report.total,
        correct = report.correct,
        accuracy = report.accuracy(),
        "evaluation finished"
    );
    report
}

/// One training row: the v10 features of a labeled question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub puzzle_id: String,
    pub question: String,
    pub expected: JudgeResult,
    pub baseline: JudgeResult,
    pub features: BTreeMap<&'static str, f64>,
}

/// v10 feature vectors for every labeled question.
pub fn feature_records(engine: &JudgeEngine, dataset: &Dataset) -> Vec<FeatureRecord> {
    let mut records = Vec::with_capacity(dataset.case_count());
    for puzzle in &dataset.puzzles {
        let knowledge = engine.build_knowledge(&puzzle.input);
        for case in &puzzle.questions {
            let result = engine.judge_v10(&knowledge, &case.question);
            records.push(FeatureRecord {
                puzzle_id: puzzle.id.clone(),
                question: case.question.clone(),
                expected: case.expected,
                baseline: result.baseline.label,
                features: result.named_features().into_iter().collect(),
            });
        }
    }
    records
}
