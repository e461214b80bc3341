//! # lexsieve
//!
//! A configurable token filter for cleaning text documents before downstream
//! analysis (topic models, embeddings, keyword extraction).
//!
//! ## Features
//!
//! - Independently toggleable exclusion rules: language, blacklist, stopword,
//!   URL, digit, number, pronoun, non-alphabetic, non-ASCII, single-character
//!   and sentiment-word
//! - Optional lemmatization and lowercasing of surviving tokens
//! - Pluggable language pipelines behind a small trait, with a bundled
//!   lightweight English pipeline
//! - Parallel, order-preserving batch cleaning
//!
//! ## Example
//!
//! ```
//! use lexsieve::cleaner::{FilterConfiguration, TextCleaner};
//!
//! let cleaner = TextCleaner::new(FilterConfiguration::default()).unwrap();
//! let cleaned = cleaner.clean(&["I love running to the http://example.com store."]);
//!
//! assert_eq!(cleaned, vec![vec!["love", "run", "store"]]);
//! ```

pub mod analysis;
pub mod cleaner;
pub mod cli;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::pipeline::{LanguagePipeline, PRONOUN_LEMMA};
    pub use crate::analysis::token::{AnnotatedToken, TokenAttributes};
    pub use crate::cleaner::{
        FilterConfiguration, TextCleaner, TokenFilterPolicy, UnwantedReason, WordLists,
    };
    pub use crate::error::{LexsieveError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
