//! Text summarization collaborator
//!
//! The walker reduces each page's paragraph text to a short description
//! through the [`Summarize`] trait. The built-in [`LeadSummarizer`] is a
//! deterministic extractive reduction; summarization failures are never
//! fatal to a crawl, the walker substitutes a sentinel instead.

use thiserror::Error;

/// Word budget handed to the summarizer for page descriptions
pub const MAX_SUMMARY_WORDS: usize = 130;
pub const MIN_SUMMARY_WORDS: usize = 30;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary bounds are inverted: max {max} < min {min}")]
    InvalidBounds { max: usize, min: usize },

    #[error("no text to summarize")]
    EmptyInput,
}

/// Reduces a block of text to a short description
pub trait Summarize: Send + Sync {
    fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, SummaryError>;
}

/// Extractive summarizer that keeps leading whole sentences
///
/// Takes words from the start of the text up to `max_words`, then backtracks
/// to the last sentence boundary inside the window as long as that keeps at
/// least `min_words`. Text already inside the budget is returned whole
/// (whitespace-normalized).
pub struct LeadSummarizer;

impl Summarize for LeadSummarizer {
    fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, SummaryError> {
        if max_words < min_words {
            return Err(SummaryError::InvalidBounds {
                max: max_words,
                min: min_words,
            });
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        if words.len() <= max_words {
            return Ok(words.join(" "));
        }

        let window = &words[..max_words];
        let cut = window
            .iter()
            .rposition(|w| w.ends_with(|c: char| matches!(c, '.' | '!' | '?')))
            .map(|i| i + 1)
            .filter(|&end| end >= min_words)
            .unwrap_or(max_words);

        Ok(words[..cut].join(" "))
    }
}
