use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::stopwords::{general_stopwords, is_punctuation_token, StopwordSet};

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Lowercases, extracts `\w+` runs, and drops stopwords and lone punctuation.
#[derive(Debug, Clone)]
pub struct LatinTokenizer {
    stopwords: StopwordSet,
}

impl LatinTokenizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Tokenizer using the general stopword list for `language_code`.
    pub fn for_language(language_code: &str) -> Self {
        Self::new(general_stopwords(language_code))
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !self.stopwords.contains(w) && !is_punctuation_token(w))
            .map(str::to_string)
            .collect()
    }
}
