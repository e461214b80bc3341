//! Token filtering and batch text cleaning.
//!
//! - [`config`]: the filter configuration and its JSON form
//! - [`word_lists`]: stopword and sentiment list loading
//! - [`policy`]: the per-token keep/drop decision
//! - [`text_cleaner`]: batch cleaning on top of a language pipeline

pub mod config;
pub mod policy;
pub mod stopwords;
pub mod text_cleaner;
pub mod word_lists;

pub use config::{BatchOptions, FilterConfiguration, StopwordSource};
pub use policy::{TokenFilterPolicy, UnwantedReason};
pub use text_cleaner::{CleanReport, CleanStats, DocumentFailure, TextCleaner, TokenDecision};
pub use word_lists::{WordLists, load_sentiment_words, load_stopwords};
