mod augmentation;
mod judge_result;
mod learned_lexicon;
mod puzzle;

pub use augmentation::KnowledgeAugmentation;
pub use judge_result::JudgeResult;
pub use learned_lexicon::LearnedLexicon;
pub use puzzle::PuzzleInput;
