//! Auxiliary word lists consulted by the token filter policy.
//!
//! Loading never fails: a missing corpus or unreadable file yields an empty
//! list and a warning, and filtering continues with that rule degraded.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use tracing::{info, warn};

use crate::cleaner::config::{FilterConfiguration, StopwordSource};
use crate::cleaner::stopwords;
use crate::error::{LexsieveError, Result};
use crate::util::text;

/// Stopwords and sentiment words, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    stopwords: AHashSet<String>,
    positive_words: AHashSet<String>,
    negative_words: AHashSet<String>,
    sentiment_words: AHashSet<String>,
}

impl WordLists {
    /// Build word lists directly from in-memory words.
    pub fn new<S, P, N>(stopwords: S, positive_words: P, negative_words: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive_words = normalize(positive_words);
        let negative_words = normalize(negative_words);
        let sentiment_words = positive_words.union(&negative_words).cloned().collect();

        WordLists {
            stopwords: normalize(stopwords),
            positive_words,
            negative_words,
            sentiment_words,
        }
    }

    /// Empty lists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the lists the configuration enables.
    ///
    /// Stopwords are read only when `filter_stopwords` is on, sentiment words
    /// only when `filter_sentiment_words` is on.
    pub fn load(config: &FilterConfiguration) -> Self {
        let stopwords = if config.filter_stopwords {
            info!("Loading stopwords");
            load_stopwords(&config.stopword_source)
        } else {
            AHashSet::new()
        };

        let (positive_words, negative_words) = if config.filter_sentiment_words {
            info!("Loading sentiment words");
            load_sentiment_words(&config.positive_words_path, &config.negative_words_path)
        } else {
            (AHashSet::new(), AHashSet::new())
        };

        let sentiment_words = positive_words.union(&negative_words).cloned().collect();

        WordLists {
            stopwords,
            positive_words,
            negative_words,
            sentiment_words,
        }
    }

    pub fn stopwords(&self) -> &AHashSet<String> {
        &self.stopwords
    }

    pub fn positive_words(&self) -> &AHashSet<String> {
        &self.positive_words
    }

    pub fn negative_words(&self) -> &AHashSet<String> {
        &self.negative_words
    }

    /// Union of positive and negative words.
    pub fn sentiment_words(&self) -> &AHashSet<String> {
        &self.sentiment_words
    }

    /// Check `word` (already lowercased) against the stopword list.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Check `word` (already lowercased) against the sentiment lists.
    pub fn is_sentiment_word(&self, word: &str) -> bool {
        self.sentiment_words.contains(word)
    }
}

/// Load a stopword list. Failures yield an empty set and a warning.
pub fn load_stopwords(source: &StopwordSource) -> AHashSet<String> {
    let result = match source {
        StopwordSource::Builtin { language } => builtin_stopwords(language),
        StopwordSource::File { path } => read_word_list(path),
        StopwordSource::None => Ok(AHashSet::new()),
    };

    result.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load stopwords");
        AHashSet::new()
    })
}

fn builtin_stopwords(language: &str) -> Result<AHashSet<String>> {
    stopwords::corpus(language)
        .map(|words| normalize(words.iter()))
        .ok_or_else(|| {
            LexsieveError::resource(format!(
                "no bundled stopword corpus named '{language}' (available: {})",
                stopwords::available().join(", ")
            ))
        })
}

/// Load the positive and negative sentiment lists.
///
/// Each file is read independently; a failure empties only that list.
pub fn load_sentiment_words(
    positive_path: &Path,
    negative_path: &Path,
) -> (AHashSet<String>, AHashSet<String>) {
    let positive = read_word_list(positive_path).unwrap_or_else(|e| {
        warn!(path = %positive_path.display(), error = %e, "Failed to load positive words");
        AHashSet::new()
    });
    let negative = read_word_list(negative_path).unwrap_or_else(|e| {
        warn!(path = %negative_path.display(), error = %e, "Failed to load negative words");
        AHashSet::new()
    });

    (positive, negative)
}

/// Read a newline-delimited word list. Line terminators are trimmed and blank
/// lines skipped.
fn read_word_list(path: &Path) -> Result<AHashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(
        content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty()),
    ))
}

fn normalize<I>(words: I) -> AHashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| text::to_lowercase(word.as_ref()))
        .collect()
}
