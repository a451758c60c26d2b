pub mod frequency;
pub mod language;
pub mod normalize;
pub mod stopwords;
pub mod tokenize;

use std::sync::LazyLock;

use tracing::debug;

pub use frequency::{aggregate, FrequencyTable, RankedEntry, TOP_N};
pub use language::{LanguageDetector, LanguageTag, WhatlangDetector};
pub use normalize::{normalize, NormalizedText, Normalizer};
pub use stopwords::StopwordSet;
pub use tokenize::{ChineseSegmenter, JiebaSegmenter, LatinTokenizer, Segmenter, Tokenizer};

static DEFAULT_ANALYZER: LazyLock<Analyzer> =
    LazyLock::new(|| Analyzer::new(&AnalyzerOptions::default()));

#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub top_n: usize,
    pub preserve_word_boundaries: bool,
    /// Language code for the general stopword list used on the latin path.
    pub latin_stopwords: String,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            preserve_word_boundaries: false,
            latin_stopwords: "en".to_string(),
        }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub language: LanguageTag,
    /// Raw detector output; `None` when detection failed.
    pub detected_code: Option<String>,
    /// Filtered tokens in text order (word-cloud input).
    pub tokens: Vec<String>,
    pub distinct_tokens: usize,
    pub top: Vec<RankedEntry>,
}

/// Normalize → classify → tokenize → aggregate.
pub struct Analyzer {
    normalizer: Normalizer,
    detector: Box<dyn LanguageDetector>,
    tokenizer: Tokenizer,
    top_n: usize,
}

impl Analyzer {
    /// Analyzer with the default backends: `whatlang`, jieba and the
    /// `stop-words` list for `options.latin_stopwords`.
    pub fn new(options: &AnalyzerOptions) -> Self {
        Self::with_backends(
            options,
            Box::new(WhatlangDetector),
            Box::new(JiebaSegmenter),
            stopwords::general_stopwords(&options.latin_stopwords),
        )
    }

    pub fn with_backends(
        options: &AnalyzerOptions,
        detector: Box<dyn LanguageDetector>,
        segmenter: Box<dyn Segmenter>,
        latin_stopwords: StopwordSet,
    ) -> Self {
        Self {
            normalizer: Normalizer::new(options.preserve_word_boundaries),
            detector,
            tokenizer: Tokenizer::new(
                ChineseSegmenter::new(segmenter, StopwordSet::chinese()),
                LatinTokenizer::new(latin_stopwords),
            ),
            top_n: options.top_n,
        }
    }

    pub fn analyze(&self, raw: &str) -> Analysis {
        let text = self.normalizer.normalize(raw);
        debug!(raw_len = raw.len(), normalized_len = text.as_str().len(), "normalized");

        let classification = language::classify(self.detector.as_ref(), text.as_str());
        let tokens = self.tokenizer.tokenize(&text, classification.tag);
        let table: FrequencyTable = tokens.iter().collect();

        Analysis {
            language: classification.tag,
            detected_code: classification.code,
            distinct_tokens: table.len(),
            top: table.top(self.top_n),
            tokens,
        }
    }
}

/// Ranked top-20 table for `raw_body_text` using the default analyzer.
pub fn analyze(raw_body_text: &str) -> Vec<RankedEntry> {
    DEFAULT_ANALYZER.analyze(raw_body_text).top
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::language::DetectionError;
    use crate::pipeline::stopwords::CHINESE_STOPWORDS;

    struct FailingDetector;

    impl LanguageDetector for FailingDetector {
        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            Err(DetectionError::Undetermined)
        }
    }

    struct EnglishDetector;

    impl LanguageDetector for EnglishDetector {
        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            Ok("eng".to_string())
        }
    }

    fn stub_analyzer(preserve_word_boundaries: bool) -> Analyzer {
        let options = AnalyzerOptions {
            preserve_word_boundaries,
            ..AnalyzerOptions::default()
        };
        Analyzer::with_backends(
            &options,
            Box::new(EnglishDetector),
            Box::new(JiebaSegmenter),
            StopwordSet::from_list(&["the"]),
        )
    }

    #[test]
    fn empty_input_is_empty_result() {
        assert!(analyze("").is_empty());
        assert!(analyze(" \n\n  ").is_empty());
    }

    #[test]
    fn undetectable_input_falls_back_to_latin() {
        let analysis = DEFAULT_ANALYZER.analyze("。");
        assert_eq!(analysis.language, LanguageTag::Other);
        assert_eq!(analysis.detected_code, None);
        assert!(analysis.tokens.is_empty());
    }

    #[test]
    fn single_char_latin_token_is_counted() {
        let analysis = DEFAULT_ANALYZER.analyze("é");
        assert_eq!(analysis.language, LanguageTag::Other);
        assert_eq!(analysis.tokens, vec!["é"]);
        assert_eq!(analysis.top, vec![RankedEntry::new("é", 1)]);
    }

    #[test]
    fn detector_failure_uses_latin_path() {
        let analyzer = Analyzer::with_backends(
            &AnalyzerOptions::default(),
            Box::new(FailingDetector),
            Box::new(JiebaSegmenter),
            StopwordSet::empty(),
        );
        let analysis = analyzer.analyze("公园");
        assert_eq!(analysis.language, LanguageTag::Other);
        assert_eq!(analysis.detected_code, None);
        assert_eq!(analysis.tokens, vec!["公园"]);
    }

    // Space stripping glues latin words together before tokenization; this is
    // the default behavior and is kept as a known limitation.
    #[test]
    fn concatenated_words_stay_glued_by_default() {
        let analysis = stub_analyzer(false).analyze("the quick brown fox the quick dog");
        assert_eq!(analysis.tokens, vec!["thequickbrownfoxthequickdog"]);
        assert_eq!(analysis.top, vec![RankedEntry::new("thequickbrownfoxthequickdog", 1)]);
    }

    #[test]
    fn word_boundary_mode_recovers_words() {
        let analysis = stub_analyzer(true).analyze("the quick brown fox the quick dog");
        assert_eq!(analysis.tokens, vec!["quick", "brown", "fox", "quick", "dog"]);
        assert_eq!(analysis.top[0], RankedEntry::new("quick", 2));
        assert_eq!(analysis.top[1], RankedEntry::new("brown", 1));
        assert_eq!(analysis.distinct_tokens, 4);
    }

    #[test]
    fn chinese_end_to_end() {
        let analysis = DEFAULT_ANALYZER.analyze("我们今天去公园玩，天气很好。");
        assert_eq!(analysis.language, LanguageTag::Chinese);
        assert_eq!(analysis.detected_code.as_deref(), Some("zh-cn"));
        assert!(analysis
            .tokens
            .iter()
            .all(|t| !CHINESE_STOPWORDS.contains(&t.as_str())));
        assert!(analysis.top.iter().any(|e| e.token == "公园"));
    }

    #[test]
    fn top_n_option_respected() {
        let options = AnalyzerOptions {
            top_n: 2,
            preserve_word_boundaries: true,
            ..AnalyzerOptions::default()
        };
        let analyzer = Analyzer::with_backends(
            &options,
            Box::new(EnglishDetector),
            Box::new(JiebaSegmenter),
            StopwordSet::empty(),
        );
        let analysis = analyzer.analyze("c b a c b c");
        assert_eq!(
            analysis.top,
            vec![RankedEntry::new("c", 3), RankedEntry::new("b", 2)]
        );
    }

    #[test]
    fn english_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/tokenizers.txt").unwrap();
        let options = AnalyzerOptions {
            preserve_word_boundaries: true,
            ..AnalyzerOptions::default()
        };
        let analysis = Analyzer::new(&options).analyze(&text);
        assert_eq!(analysis.language, LanguageTag::Other);
        assert_eq!(analysis.top[0], RankedEntry::new("tokenizer", 7));
        assert!(analysis.top.len() <= TOP_N);
        assert!(analysis.tokens.iter().all(|t| t != "the" && t != "and"));
    }

    #[test]
    fn english_content_words_survive_stopwords() {
        let options = AnalyzerOptions {
            preserve_word_boundaries: true,
            ..AnalyzerOptions::default()
        };
        let analysis = Analyzer::new(&options)
            .analyze("Web page information about the world research system home page web and");
        assert_eq!(analysis.top[0], RankedEntry::new("web", 2));
        assert_eq!(analysis.top[1], RankedEntry::new("page", 2));
        assert!(analysis.tokens.iter().any(|t| t == "world"));
        assert!(analysis.tokens.iter().all(|t| t != "the" && t != "and" && t != "about"));
    }

    #[test]
    fn chinese_page_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/park.html").unwrap();
        let body = crate::html::extract_body_text(&html);
        let analysis = DEFAULT_ANALYZER.analyze(&body);
        assert_eq!(analysis.language, LanguageTag::Chinese);
        assert!(analysis.top.iter().any(|e| e.token == "公园" && e.count >= 2));
        for entry in &analysis.top {
            assert!(!CHINESE_STOPWORDS.contains(&entry.token.as_str()));
            assert!(!entry.token.chars().any(|c| c.is_ascii_digit()));
        }
        // script body never reaches the tokenizer
        assert!(analysis.tokens.iter().all(|t| !t.contains("track")));
    }

    #[test]
    fn english_fixture_glued_by_default() {
        let text = std::fs::read_to_string("tests/fixtures/tokenizers.txt").unwrap();
        let analysis = analyze(&text);
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis[0].count, 1);
    }
}
