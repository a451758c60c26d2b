use std::sync::LazyLock;

use jieba_rs::Jieba;

use crate::pipeline::stopwords::{is_chinese_punctuation, StopwordSet};

static JIEBA: LazyLock<Jieba> = LazyLock::new(Jieba::new);

/// Script-aware word segmentation.
pub trait Segmenter: Send + Sync {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// jieba precise mode with HMM for unknown words. The dictionary is loaded
/// once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct JiebaSegmenter;

impl Segmenter for JiebaSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        JIEBA.cut(text, true)
    }
}

pub struct ChineseSegmenter {
    segmenter: Box<dyn Segmenter>,
    stopwords: StopwordSet,
}

impl ChineseSegmenter {
    pub fn new(segmenter: Box<dyn Segmenter>, stopwords: StopwordSet) -> Self {
        Self {
            segmenter,
            stopwords,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .chars()
            .filter(|&c| c != '\n' && !is_chinese_punctuation(c))
            .collect();
        if cleaned.is_empty() {
            return Vec::new();
        }

        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .filter(|w| !w.trim().is_empty() && !self.stopwords.contains(w))
            .map(str::to_string)
            .collect()
    }
}

impl Default for ChineseSegmenter {
    fn default() -> Self {
        Self::new(Box::new(JiebaSegmenter), StopwordSet::chinese())
    }
}
