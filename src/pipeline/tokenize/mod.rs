pub mod chinese;
pub mod latin;

pub use chinese::{ChineseSegmenter, JiebaSegmenter, Segmenter};
pub use latin::LatinTokenizer;

use tracing::debug;

use super::language::LanguageTag;
use super::normalize::NormalizedText;

/// Routes normalized text to the strategy for its language tag.
pub struct Tokenizer {
    chinese: ChineseSegmenter,
    latin: LatinTokenizer,
}

impl Tokenizer {
    pub fn new(chinese: ChineseSegmenter, latin: LatinTokenizer) -> Self {
        Self { chinese, latin }
    }

    pub fn tokenize(&self, text: &NormalizedText, tag: LanguageTag) -> Vec<String> {
        let tokens = match tag {
            LanguageTag::Chinese => self.chinese.tokenize(text.as_str()),
            LanguageTag::Other => self.latin.tokenize(text.as_str()),
        };
        debug!(tag = tag.as_str(), tokens = tokens.len(), "tokenized");
        tokens
    }
}
