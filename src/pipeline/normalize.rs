use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Body text with markup remnants, ASCII punctuation, digits and whitespace
/// artifacts removed. Only [`Normalizer`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips structural noise from extracted body text.
///
/// By default every newline and every space is deleted, which is what Chinese
/// text wants but glues space-delimited words together. With
/// `preserve_word_boundaries` each whitespace run collapses to one space instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    preserve_word_boundaries: bool,
}

impl Normalizer {
    pub const fn new(preserve_word_boundaries: bool) -> Self {
        Self {
            preserve_word_boundaries,
        }
    }

    pub const fn preserves_word_boundaries(&self) -> bool {
        self.preserve_word_boundaries
    }

    pub fn normalize(&self, raw: &str) -> NormalizedText {
        let without_markup = MARKUP_RE.replace_all(raw, "");
        let without_punct: String = without_markup
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        let without_digits = DIGITS_RE.replace_all(&without_punct, "");

        let cleaned = if self.preserve_word_boundaries {
            WHITESPACE_RUN_RE
                .replace_all(&without_digits, " ")
                .trim()
                .to_string()
        } else {
            without_digits
                .replace('\n', "")
                .replace(' ', "")
                .trim()
                .to_string()
        };

        NormalizedText(cleaned)
    }
}

/// Normalizes with the default, space-stripping settings.
pub fn normalize(raw: &str) -> NormalizedText {
    Normalizer::default().normalize(raw)
}
