use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use whatlang::Lang;

/// The only locale code routed to the Chinese segmenter.
pub const CHINESE_LOCALE: &str = "zh-cn";

/// Binary routing decision collapsed from the detector's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Chinese,
    Other,
}

impl LanguageTag {
    pub fn from_locale(code: &str) -> Self {
        if code == CHINESE_LOCALE {
            LanguageTag::Chinese
        } else {
            LanguageTag::Other
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageTag::Chinese => "chinese",
            LanguageTag::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("no text to detect a language from")]
    EmptyInput,
    #[error("language could not be determined")]
    Undetermined,
}

/// A language detector returning a locale code such as `zh-cn` or `eng`.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Detector backed by `whatlang`. Mandarin is reported as `zh-cn`, everything
/// else as its ISO 639-3 code.
///
/// whatlang does not separate Simplified from Traditional script, so
/// Traditional Chinese is also `zh-cn` and takes the Chinese path. A
/// `zh-tw`-aware detector would send it to the latin tokenizer instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyInput);
        }
        let info = whatlang::detect(text).ok_or(DetectionError::Undetermined)?;
        Ok(locale_code(info.lang()).to_string())
    }
}

fn locale_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Cmn => CHINESE_LOCALE,
        other => other.code(),
    }
}

/// Outcome of classifying a text: the routing tag plus the raw code, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tag: LanguageTag,
    pub code: Option<String>,
}

/// Runs the detector and collapses its answer to a [`LanguageTag`].
/// Detector failures fall back to [`LanguageTag::Other`].
pub fn classify(detector: &dyn LanguageDetector, text: &str) -> Classification {
    match detector.detect(text) {
        Ok(code) => {
            let tag = LanguageTag::from_locale(&code);
            debug!(code = %code, tag = tag.as_str(), "language detected");
            Classification {
                tag,
                code: Some(code),
            }
        }
        Err(e) => {
            debug!(error = %e, "language detection failed, using latin tokenizer");
            Classification {
                tag: LanguageTag::Other,
                code: None,
            }
        }
    }
}
