use regex::Regex;
use std::sync::LazyLock;

static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(who|what|how|why|when|where)\b").unwrap());
static QUESTION_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(who is|what is|how does|why does|tell me about)\s+").unwrap()
});

/// True if the input starts with an interrogative word, e.g. "Who is Karl Marx".
pub fn is_question(topic: &str) -> bool {
    let topic = topic.trim().to_lowercase();
    QUESTION_RE.is_match(&topic)
}

/// Lowercase and strip one leading question phrase ("who is ", "tell me about ", ...).
pub fn normalize_topic(topic: &str) -> String {
    let topic = topic.to_lowercase();
    QUESTION_PREFIX_RE.replace(&topic, "").trim().to_string()
}
