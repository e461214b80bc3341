//! Configuration for token filtering and batch cleaning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexsieveError, Result};

/// Where the stopword list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StopwordSource {
    /// A bundled corpus, looked up by name (e.g. `"english"`).
    Builtin { language: String },

    /// A newline-delimited word list on disk.
    File { path: PathBuf },

    /// No list; only the pipeline's own stop flag applies.
    None,
}

impl Default for StopwordSource {
    fn default() -> Self {
        StopwordSource::Builtin {
            language: "english".to_string(),
        }
    }
}

/// Batching options for the tokenization step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Number of documents handed to the pipeline at once.
    pub batch_size: usize,

    /// Worker threads for tokenization.
    /// If None, uses the number of CPU cores.
    pub num_threads: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: 1024,
            num_threads: None,
        }
    }
}

impl BatchOptions {
    /// Reject settings that cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(LexsieveError::invalid_config("batch_size must be positive"));
        }
        if self.num_threads == Some(0) {
            return Err(LexsieveError::invalid_config(
                "num_threads must be positive when set",
            ));
        }
        Ok(())
    }

    /// Effective number of worker threads.
    pub fn threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }
}

/// Which tokens to drop and how to normalize the survivors.
///
/// Every toggle is independent and every combination is legal. An empty
/// `language_whitelist` or `token_blacklist` disables that check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfiguration {
    /// Language codes to keep; empty keeps every language.
    pub language_whitelist: Vec<String>,

    /// Tokens always dropped, compared case-insensitively.
    pub token_blacklist: Vec<String>,

    /// Lowercase surviving tokens.
    pub lowercase: bool,

    /// Emit lemmas instead of surface forms.
    pub lemmatize: bool,

    pub filter_stopwords: bool,
    pub filter_sentiment_words: bool,
    pub filter_url: bool,
    pub filter_digit: bool,
    pub filter_number: bool,
    pub filter_pronoun: bool,
    pub filter_non_alpha: bool,
    pub filter_non_ascii: bool,
    pub filter_character: bool,

    /// Stopword list consulted in addition to the pipeline's stop flag.
    pub stopword_source: StopwordSource,

    /// Newline-delimited positive sentiment words.
    pub positive_words_path: PathBuf,

    /// Newline-delimited negative sentiment words.
    pub negative_words_path: PathBuf,

    /// Tokenization batching.
    pub batch: BatchOptions,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            language_whitelist: vec!["en".to_string()],
            token_blacklist: vec!["rt".to_string(), "oc".to_string()],
            lowercase: true,
            lemmatize: true,
            filter_stopwords: true,
            filter_sentiment_words: false,
            filter_url: true,
            filter_digit: true,
            filter_number: true,
            filter_pronoun: true,
            filter_non_alpha: true,
            filter_non_ascii: true,
            filter_character: true,
            stopword_source: StopwordSource::default(),
            positive_words_path: PathBuf::from("corpus/pos_words.txt"),
            negative_words_path: PathBuf::from("corpus/neg_words.txt"),
            batch: BatchOptions::default(),
        }
    }
}

impl FilterConfiguration {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that drops nothing and leaves tokens untouched.
    pub fn all_disabled() -> Self {
        Self {
            language_whitelist: Vec::new(),
            token_blacklist: Vec::new(),
            lowercase: false,
            lemmatize: false,
            filter_stopwords: false,
            filter_sentiment_words: false,
            filter_url: false,
            filter_digit: false,
            filter_number: false,
            filter_pronoun: false,
            filter_non_alpha: false,
            filter_non_ascii: false,
            filter_character: false,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_language_whitelist<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_whitelist = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_token_blacklist<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.token_blacklist = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_lemmatize(mut self, lemmatize: bool) -> Self {
        self.lemmatize = lemmatize;
        self
    }

    pub fn with_filter_stopwords(mut self, enabled: bool) -> Self {
        self.filter_stopwords = enabled;
        self
    }

    pub fn with_filter_sentiment_words(mut self, enabled: bool) -> Self {
        self.filter_sentiment_words = enabled;
        self
    }

    pub fn with_filter_url(mut self, enabled: bool) -> Self {
        self.filter_url = enabled;
        self
    }

    pub fn with_filter_digit(mut self, enabled: bool) -> Self {
        self.filter_digit = enabled;
        self
    }

    pub fn with_filter_number(mut self, enabled: bool) -> Self {
        self.filter_number = enabled;
        self
    }

    pub fn with_filter_pronoun(mut self, enabled: bool) -> Self {
        self.filter_pronoun = enabled;
        self
    }

    pub fn with_filter_non_alpha(mut self, enabled: bool) -> Self {
        self.filter_non_alpha = enabled;
        self
    }

    pub fn with_filter_non_ascii(mut self, enabled: bool) -> Self {
        self.filter_non_ascii = enabled;
        self
    }

    pub fn with_filter_character(mut self, enabled: bool) -> Self {
        self.filter_character = enabled;
        self
    }

    pub fn with_stopword_source(mut self, source: StopwordSource) -> Self {
        self.stopword_source = source;
        self
    }

    /// Set the positive and negative sentiment word list paths.
    pub fn with_sentiment_paths<P, N>(mut self, positive: P, negative: N) -> Self
    where
        P: Into<PathBuf>,
        N: Into<PathBuf>,
    {
        self.positive_words_path = positive.into();
        self.negative_words_path = negative.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch.batch_size = batch_size;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.batch.num_threads = Some(num_threads);
        self
    }
}
