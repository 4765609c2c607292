//! Phrase lists the concept extractor and force rules key on.

/// An abstract concept inferred when every group has at least one hit.
pub struct InferenceRule {
    pub concept: &'static str,
    pub all_of: &'static [&'static [&'static str]],
}

static DEATH_TERMS: &[&str] = &["dead", "died", "death", "corpse", "body", "deceased", "죽", "사망", "시체"];
static SELF_TERMS: &[&str] = &["himself", "herself", "themselves", "스스로"];
static WATER_TERMS: &[&str] = &["water", "sea", "lake", "river", "ocean", "pool", "bath", "물", "바다", "강"];

/// Co-occurrence rules producing a puzzle's inferred concepts.
pub static INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule { concept: "death", all_of: &[DEATH_TERMS] },
    InferenceRule {
        concept: "crime",
        all_of: &[&["murder", "murdered", "kill", "killed", "stole", "steal", "stolen", "robbery", "crime", "criminal", "살인", "살해", "도둑", "범죄"]],
    },
    InferenceRule { concept: "suicide", all_of: &[&["suicide", "자살"]] },
    InferenceRule {
        concept: "suicide",
        all_of: &[&["hang", "hanged", "hanging", "hung", "noose", "jumped", "overdose"], SELF_TERMS],
    },
    InferenceRule {
        concept: "accident",
        all_of: &[&["accident", "accidentally", "slipped", "tripped", "crash", "crashed", "mistake", "사고", "실수"]],
    },
    InferenceRule {
        concept: "intentional",
        all_of: &[&["planned", "deliberately", "intentionally", "on purpose", "plot", "revenge", "일부러", "계획", "고의"]],
    },
    InferenceRule {
        concept: "deception",
        all_of: &[&["lie", "lied", "trick", "tricked", "fake", "pretend", "pretended", "disguise", "거짓", "속"]],
    },
    InferenceRule { concept: "poisoning", all_of: &[&["poison", "poisoned", "toxic", "독"]] },
    InferenceRule { concept: "drowning", all_of: &[&["drown", "drowned", "익사"]] },
    InferenceRule { concept: "drowning", all_of: &[WATER_TERMS, DEATH_TERMS] },
    InferenceRule { concept: "disability", all_of: &[&["blind", "deaf", "mute", "paralyzed", "장님", "맹인"]] },
    InferenceRule {
        concept: "melting",
        all_of: &[&["ice", "snow", "얼음", "눈"], &["melt", "melted", "melting", "puddle", "water", "녹", "물"]],
    },
    InferenceRule {
        concept: "locked_room",
        all_of: &[&["locked", "sealed", "잠긴", "잠겨"], &["room", "door", "house", "방", "문"]],
    },
    InferenceRule { concept: "fall", all_of: &[&["fell", "fall", "fallen", "jumped", "추락", "떨어지"]] },
];

/// Contextual concept groups checked on both question and answer text.
pub static TEMPORAL_ORDER: &[&str] = &["before", "after", "earlier", "later", "first", "last", "then", "전에", "후에", "먼저", "나중"];
pub static CAUSALITY: &[&str] = &["because", "cause", "caused", "reason", "why", "due to", "result", "때문", "원인", "이유", "왜"];
pub static PERSON: &[&str] = &["man", "woman", "he", "she", "person", "someone", "people", "boy", "girl", "child", "husband", "wife", "남자", "여자", "사람", "그녀"];
pub static DEATH: &[&str] = DEATH_TERMS;
pub static KILL: &[&str] = &["kill", "killed", "murder", "murdered", "shot", "stabbed", "poisoned", "살해", "살인", "죽이"];
pub static PLACE: &[&str] = &["room", "house", "building", "prison", "cell", "cave", "island", "car", "ship", "방", "집", "건물", "감옥", "동굴", "섬"];
pub static ESCAPE: &[&str] = &["escape", "escaped", "flee", "fled", "exit", "leave", "left", "get out", "탈출", "도망", "나가"];

/// Totality quantifiers ("both", "all").
pub static TOTALITY_MARKERS: &[&str] = &["both", "all", "every", "each", "everyone", "everybody", "all of", "둘 다", "모두", "전부", "다들", "모든"];

/// Singularity phrases ("only one").
pub static SINGULARITY_MARKERS: &[&str] = &["only one", "just one", "single", "one of", "alone", "only", "하나만", "한 명만", "혼자", "한 명", "하나"];

/// Hedging or generalizing vocabulary.
pub static GENERALIZATION_MARKERS: &[&str] = &["any", "some", "something", "someone", "somebody", "anything", "anyone", "kind of", "type of", "sort of", "in general", "generally", "어떤", "무언가", "뭔가", "누군가", "종류", "일종"];

/// Modal hedges.
pub static MODALITY_MARKERS: &[&str] = &["maybe", "perhaps", "possibly", "might", "could", "probably", "likely", "may", "아마", "혹시", "어쩌면"];

/// Interrogatives that open a non-polar question.
pub static WH_WORDS: &[&str] = &["what", "why", "how", "when", "where", "who", "whom", "whose", "which", "무엇", "뭐", "뭘", "왜", "어떻게", "언제", "어디", "누구", "무슨"];
