//! Stopword sets and punctuation tables.
//!
//! The Chinese list and punctuation set are fixed. The Latin list is the NLTK
//! list from the `stop-words` crate for a configurable language.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::warn;

/// Common Chinese function words and conjunctions excluded from counting.
pub const CHINESE_STOPWORDS: [&str; 20] = [
    "的", "了", "在", "是", "我", "你", "他", "她", "它", "们", "这", "那", "之", "与", "和", "或",
    "虽然", "但是", "然而", "因此",
];

/// Full-width and half-width symbols stripped before Chinese segmentation.
pub const CHINESE_PUNCTUATION: &str =
    "、，。！？；：“”‘’~@#￥%……&*（）【】｛｝+-*/=《》<>「」『』【】〔〕｟｠«»“”‘’'':;,/\\|[]{}()$^";

pub fn is_chinese_punctuation(c: char) -> bool {
    CHINESE_PUNCTUATION.contains(c)
}

/// A token that is exactly one ASCII punctuation character.
pub fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

/// Exact-string membership set.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn chinese() -> Self {
        Self::from_list(&CHINESE_STOPWORDS)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// General-purpose stopwords for `language_code`, lowercased.
///
/// Unknown codes fall back to English.
pub fn general_stopwords(language_code: &str) -> StopwordSet {
    let lang = match language_code.to_lowercase().as_str() {
        "en" | "eng" | "english" => LANGUAGE::English,
        "de" | "deu" | "german" => LANGUAGE::German,
        "fr" | "fra" | "french" => LANGUAGE::French,
        "es" | "spa" | "spanish" => LANGUAGE::Spanish,
        "it" | "ita" | "italian" => LANGUAGE::Italian,
        "pt" | "por" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "nld" | "dutch" => LANGUAGE::Dutch,
        "ru" | "rus" | "russian" => LANGUAGE::Russian,
        "sv" | "swe" | "swedish" => LANGUAGE::Swedish,
        other => {
            warn!("No stopword list for '{}', using English", other);
            LANGUAGE::English
        }
    };

    StopwordSet {
        words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
    }
}
