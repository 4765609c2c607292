/// English function words dropped by the tokenizer.
pub static ENGLISH: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "am",
    "do", "does", "did", "done", "have", "has", "had", "having",
    "he", "she", "it", "they", "them", "his", "her", "hers", "its", "their", "him",
    "i", "you", "we", "me", "my", "your", "our", "us",
    "this", "that", "these", "those", "there", "here",
    "of", "in", "on", "at", "to", "for", "from", "by", "with", "about", "into", "onto", "as",
    "and", "or", "but", "if", "so", "than", "too", "very", "just", "also",
    "what", "which", "who", "whom", "whose", "why", "how", "when", "where",
    "can", "could", "would", "should", "will", "shall", "may", "might", "must",
    "any", "some", "something", "someone", "somebody", "anything", "anyone",
    "not", "no", "never", "yes", "kind", "type", "sort", "else",
];

/// Korean stems carrying no domain meaning.
pub static KOREAN: &[&str] = &[
    "그", "그녀", "그것", "이것", "저것", "것", "수", "등", "때", "저", "이",
    "무엇", "뭐", "뭘", "왜", "어떻게", "언제", "어디", "누구", "무슨",
    "혹시", "정말", "아주", "그리고", "하지만", "그래서", "어떤", "있", "하",
];
