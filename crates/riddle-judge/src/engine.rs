//! JudgeEngine: the entry point for riddle-judge.

use std::path::Path;
use std::sync::Arc;

use riddle_core::config::{JudgeStrategy, RiddleConfig};
use riddle_core::errors::RiddleResult;
use riddle_core::models::PuzzleInput;
use riddle_core::traits::{IAmbiguityResolver, IKnowledgeAugmenter, ILexiconSource, NoOpResolver};
use riddle_core::JudgeResult;
use riddle_embeddings::EmbeddingEngine;
use riddle_knowledge::{KnowledgeBuilder, KnowledgeCache, ProblemKnowledge, TaxonomyGraph};
use riddle_lexicon::{JsonFileSource, Lexicon, LexiconStore, NoLearnedSource};
use tracing::{debug, info, warn};

use crate::analysis::{self, Analysis, LexicalAnalysis};
use crate::answer_similarity::AnswerScorer;
use crate::decision::{self, Decision, DecisionPath};
use crate::v10::{self, guards, SoftmaxClassifier, V10Features, V10Result, V9Baseline};

/// Judges questions against a puzzle. Never fails: any internal error
/// degrades to [`JudgeResult::Irrelevant`].
pub trait IQuestionJudge: Send + Sync {
    /// Judge with the configured strategy.
    fn judge(&self, knowledge: &ProblemKnowledge, question: &str) -> JudgeResult;

    fn judge_with(
        &self,
        strategy: JudgeStrategy,
        knowledge: &ProblemKnowledge,
        question: &str,
    ) -> JudgeResult;
}

/// Heuristic outcome with the numbers behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct V9Outcome {
    /// After negation inversion.
    pub label: JudgeResult,
    pub decision: Decision,
    pub answer_score: f64,
    pub content_score: f64,
}

impl V9Outcome {
    fn rejected() -> Self {
        Self {
            label: JudgeResult::Irrelevant,
            decision: Decision::new(JudgeResult::Irrelevant, DecisionPath::Rejected),
            answer_score: 0.0,
            content_score: 0.0,
        }
    }
}

/// Assembles a [`JudgeEngine`] with optional collaborators.
pub struct JudgeEngineBuilder {
    config: RiddleConfig,
    embeddings: Option<Arc<EmbeddingEngine>>,
    lexicon_source: Option<Box<dyn ILexiconSource>>,
    resolver: Arc<dyn IAmbiguityResolver>,
    augmenter: Option<Arc<dyn IKnowledgeAugmenter>>,
    classifier: Option<SoftmaxClassifier>,
}

impl JudgeEngineBuilder {
    pub fn embeddings(mut self, engine: Arc<EmbeddingEngine>) -> Self {
        self.embeddings = Some(engine);
        self
    }

    pub fn lexicon_source(mut self, source: Box<dyn ILexiconSource>) -> Self {
        self.lexicon_source = Some(source);
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn IAmbiguityResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn augmenter(mut self, augmenter: Arc<dyn IKnowledgeAugmenter>) -> Self {
        self.augmenter = Some(augmenter);
        self
    }

    pub fn classifier(mut self, classifier: SoftmaxClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> RiddleResult<JudgeEngine> {
        self.config.validate()?;

        let embeddings = match self.embeddings {
            Some(e) => e,
            None => Arc::new(EmbeddingEngine::new(self.config.embedding.clone())?),
        };

        let source: Box<dyn ILexiconSource> = match self.lexicon_source {
            Some(source) => source,
            None => match self.config.lexicon.learned_path.as_deref() {
                Some(path) => Box::new(JsonFileSource::new(path)),
                None => Box::new(NoLearnedSource),
            },
        };
        let lexicon_store = LexiconStore::new(source);
        let lexicon = lexicon_store.get();
        let taxonomy = TaxonomyGraph::from_edges(lexicon.taxonomy_edges());

        let mut builder = KnowledgeBuilder::new(self.config.knowledge.clone(), lexicon.clone());
        if let Some(augmenter) = self.augmenter {
            builder = builder.with_augmenter(augmenter);
        }
        let sessions = KnowledgeCache::new(Arc::new(builder), &self.config.session);

        let classifier = self
            .classifier
            .unwrap_or_else(|| SoftmaxClassifier::from_config(&self.config.classifier));

        info!(
            strategy = ?self.config.strategy,
            resolver = self.resolver.name(),
            classifier = classifier.version(),
            "JudgeEngine initialized"
        );

        Ok(JudgeEngine {
            config: self.config,
            embeddings,
            lexicon,
            taxonomy,
            sessions,
            resolver: self.resolver,
            classifier,
        })
    }
}

/// Owns every collaborator a judgment needs.
pub struct JudgeEngine {
    config: RiddleConfig,
    embeddings: Arc<EmbeddingEngine>,
    lexicon: Arc<Lexicon>,
    /// Global taxonomy, for answer scoring without a puzzle.
    taxonomy: TaxonomyGraph,
    sessions: KnowledgeCache,
    resolver: Arc<dyn IAmbiguityResolver>,
    classifier: SoftmaxClassifier,
}

impl JudgeEngine {
    pub fn builder(config: RiddleConfig) -> JudgeEngineBuilder {
        JudgeEngineBuilder {
            config,
            embeddings: None,
            lexicon_source: None,
            resolver: Arc::new(NoOpResolver),
            augmenter: None,
            classifier: None,
        }
    }

    /// Engine with every collaborator taken from configuration.
    pub fn new(config: RiddleConfig) -> RiddleResult<Self> {
        Self::builder(config).build()
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> RiddleResult<Self> {
        Self::new(RiddleConfig::from_file(path)?)
    }

    pub fn config(&self) -> &RiddleConfig {
        &self.config
    }

    pub fn embeddings(&self) -> &Arc<EmbeddingEngine> {
        &self.embeddings
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn classifier(&self) -> &SoftmaxClassifier {
        &self.classifier
    }

    // --- puzzle sessions ---

    /// Knowledge for a puzzle session, built on first use.
    pub fn knowledge_for(&self, puzzle_id: &str, puzzle: &PuzzleInput) -> Arc<ProblemKnowledge> {
        self.sessions.get_or_build(puzzle_id, puzzle)
    }

    /// Knowledge outside any session.
    pub fn build_knowledge(&self, puzzle: &PuzzleInput) -> ProblemKnowledge {
        self.sessions.builder().build(puzzle)
    }

    pub fn end_session(&self, puzzle_id: &str) {
        self.sessions.evict(puzzle_id);
    }

    pub fn sessions(&self) -> &KnowledgeCache {
        &self.sessions
    }

    // --- lifecycle ---

    pub fn clear_cache(&self) {
        self.embeddings.clear_cache();
    }

    pub fn release_model(&self) {
        self.embeddings.release_model();
    }

    // --- judging ---

    /// Heuristic label.
    pub fn judge_v9(&self, knowledge: &ProblemKnowledge, question: &str) -> JudgeResult {
        match self.try_v9(knowledge, question) {
            Ok(outcome) => outcome.label,
            Err(e) => {
                warn!(error = %e, "heuristic judgment failed, answering irrelevant");
                JudgeResult::Irrelevant
            }
        }
    }

    /// Heuristic judgment with its scores and decision path.
    pub fn try_v9(&self, knowledge: &ProblemKnowledge, question: &str) -> RiddleResult<V9Outcome> {
        let lexical = match analysis::lexical(question, knowledge) {
            Ok(l) => l,
            Err(rejection) => {
                debug!(?rejection, "question rejected");
                return Ok(V9Outcome::rejected());
            }
        };
        let negated = lexical.question.negated;

        if let Some(decision) = forced_decision(&lexical) {
            return Ok(V9Outcome {
                label: decision.label.invert_if(negated),
                decision,
                answer_score: 0.0,
                content_score: 0.0,
            });
        }

        let analysis = analysis::score(lexical, knowledge, &self.embeddings, &self.config)?;
        let decision = decision::decide(
            &analysis.ladder_inputs(knowledge),
            &self.config.thresholds,
            self.resolver.as_ref(),
        );
        debug!(path = ?decision.path, label = %decision.label, negated, "heuristic decision");

        Ok(V9Outcome {
            label: decision.label.invert_if(negated),
            decision,
            answer_score: analysis.answer.score,
            content_score: analysis.content.score,
        })
    }

    /// Learned judgment with probabilities, features, and the heuristic baseline.
    pub fn judge_v10(&self, knowledge: &ProblemKnowledge, question: &str) -> V10Result {
        match self.try_v10(knowledge, question) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "learned judgment failed, answering irrelevant");
                V10Result::irrelevant()
            }
        }
    }

    pub fn try_v10(&self, knowledge: &ProblemKnowledge, question: &str) -> RiddleResult<V10Result> {
        let lexical = match analysis::lexical(question, knowledge) {
            Ok(l) => l,
            Err(rejection) => {
                debug!(?rejection, "question rejected");
                return Ok(V10Result::irrelevant());
            }
        };
        let negated = lexical.question.negated;
        let forced = forced_decision(&lexical);

        let analysis = analysis::score(lexical, knowledge, &self.embeddings, &self.config)?;
        let baseline_decision = forced.unwrap_or_else(|| {
            decision::decide(
                &analysis.ladder_inputs(knowledge),
                &self.config.thresholds,
                self.resolver.as_ref(),
            )
        });
        let baseline = V9Baseline {
            label: baseline_decision.label.invert_if(negated),
            answer_score: analysis.answer.score,
            content_score: analysis.content.score,
            path: baseline_decision.path,
        };

        let pairs = v10::pair_similarities(&analysis, &self.embeddings)?;
        let features = V10Features::extract(
            &analysis,
            pairs,
            baseline_decision.path,
            self.config.knowledge.max_question_chars,
        );
        let prediction = self.classifier.predict(&features);

        let fired = guards::fired(&analysis, &self.config.thresholds);
        let (label, confidence) = if fired.is_empty() {
            (prediction.label.invert_if(negated), prediction.confidence)
        } else {
            (guards::GUARDED_LABEL.invert_if(negated), 1.0)
        };

        debug!(
            %label,
            confidence,
            guards = fired.len(),
            baseline = %baseline.label,
            "learned decision"
        );

        Ok(V10Result {
            label,
            confidence,
            probabilities: prediction.probabilities,
            guards: fired,
            negated,
            features,
            similarities: raw_similarities(&analysis, pairs),
            baseline,
        })
    }

    /// How close a final guess is to the truth, 0-100.
    pub fn answer_similarity(
        &self,
        user: &str,
        correct: &str,
        content: Option<&str>,
        knowledge: Option<&ProblemKnowledge>,
    ) -> u8 {
        AnswerScorer {
            engine: &self.embeddings,
            lexicon: &self.lexicon,
            taxonomy: &self.taxonomy,
            config: &self.config.knowledge,
        }
        .score(user, correct, content, knowledge)
    }
}

impl IQuestionJudge for JudgeEngine {
    fn judge(&self, knowledge: &ProblemKnowledge, question: &str) -> JudgeResult {
        self.judge_with(self.config.strategy, knowledge, question)
    }

    fn judge_with(
        &self,
        strategy: JudgeStrategy,
        knowledge: &ProblemKnowledge,
        question: &str,
    ) -> JudgeResult {
        match strategy {
            JudgeStrategy::Heuristic => self.judge_v9(knowledge, question),
            JudgeStrategy::Learned => self.judge_v10(knowledge, question).label,
        }
    }
}

/// Force rules, checked before similarity.
fn forced_decision(lexical: &LexicalAnalysis) -> Option<Decision> {
    if lexical.quantity_mismatch {
        return Some(Decision::new(JudgeResult::No, DecisionPath::QuantityForce));
    }
    if lexical.taxonomy.forces_no() {
        return Some(Decision::new(JudgeResult::No, DecisionPath::TaxonomyForce));
    }
    None
}

fn raw_similarities(analysis: &Analysis, pairs: v10::PairSimilarities) -> v10::RawSimilarities {
    v10::RawSimilarities {
        answer_max: analysis.answer.stats.max,
        answer_avg: analysis.answer.stats.mean,
        content_max: analysis.content.stats.max,
        content_avg: analysis.content.stats.mean,
        pair_answer: pairs.answer,
        pair_content: pairs.content,
    }
}
