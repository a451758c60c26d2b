use std::path::Path;

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::{AnalyzerOptions, TOP_N};

const DEFAULT_CONFIG_NAME: &str = "wordfreq";
const ENV_PREFIX: &str = "WORDFREQ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub top_n: usize,
    pub latin_stopwords: String,
    pub preserve_word_boundaries: bool,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            top_n: TOP_N,
            latin_stopwords: "en".to_string(),
            preserve_word_boundaries: false,
            request_timeout_secs: 30,
            user_agent: concat!("page_wordfreq/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("top_n must be at least 1")]
    ZeroTopN,
    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,
    #[error("user_agent must not be empty")]
    EmptyUserAgent,
}

impl Settings {
    /// Defaults, then `wordfreq.toml` (or `path`), then `WORDFREQ_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("top_n", defaults.top_n as u64)?
            .set_default("latin_stopwords", defaults.latin_stopwords)?
            .set_default("preserve_word_boundaries", defaults.preserve_word_boundaries)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.top_n == 0 {
            return Err(SettingsError::ZeroTopN);
        }
        if self.request_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(SettingsError::EmptyUserAgent);
        }
        Ok(())
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            top_n: self.top_n,
            preserve_word_boundaries: self.preserve_word_boundaries,
            latin_stopwords: self.latin_stopwords.clone(),
        }
    }
}
