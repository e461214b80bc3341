//! Language pipelines that turn raw text into annotated tokens.
//!
//! The token filter policy only ever sees what a [`LanguagePipeline`]
//! produces. Tokenization, lemmatization and per-token attribute detection
//! all live behind this trait, so a heavier NLP backend or a test fake can be
//! swapped in without touching the filtering logic.

use rayon::prelude::*;

use crate::analysis::token::AnnotatedToken;
use crate::error::Result;

/// Lemma assigned to personal pronouns that have no canonical surface lemma.
///
/// This is the marker the bundled pipelines emit and the one the default
/// [`TokenAttributes::is_pronoun`](crate::analysis::token::TokenAttributes::is_pronoun)
/// checks for.
pub const PRONOUN_LEMMA: &str = "-PRON-";

/// Trait for pipelines that tokenize and annotate text.
pub trait LanguagePipeline: Send + Sync {
    /// Tokenize one document into annotated tokens, in document order.
    fn tokenize(&self, text: &str) -> Result<Vec<AnnotatedToken>>;

    /// Tokenize many documents.
    ///
    /// The result has one entry per input text, in input order, so a failure
    /// in one document does not affect the others. The default implementation
    /// fans out over the current rayon pool.
    fn tokenize_all(&self, texts: &[&str]) -> Vec<Result<Vec<AnnotatedToken>>> {
        texts.par_iter().map(|text| self.tokenize(text)).collect()
    }

    /// Language code assigned to the tokens this pipeline produces.
    fn language(&self) -> &str;

    /// Get the name of this pipeline (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod english;

pub use english::EnglishPipeline;
