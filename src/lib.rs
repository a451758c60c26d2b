//! Word frequency analysis for web page text.
//!
//! Body text is normalized, routed by detected language to a Chinese segmenter
//! or a latin word tokenizer, filtered against stopword lists and counted into a
//! ranked top-N table that feeds a bar chart and a word cloud.

pub mod config;
pub mod fetch;
pub mod html;
pub mod pipeline;
pub mod report;
