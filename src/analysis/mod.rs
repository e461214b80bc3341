//! Text analysis module for lexsieve.
//!
//! This module provides the linguistic side of cleaning: annotated tokens,
//! the language pipeline abstraction that produces them, and the lemmatizers
//! the bundled English pipeline uses to fill in lemma forms.

pub mod lemmatizer;
pub mod pipeline;
pub mod token;

// Re-export commonly used types
pub use lemmatizer::{IdentityLemmatizer, Lemmatizer, RuleLemmatizer};
pub use pipeline::{EnglishPipeline, LanguagePipeline, PRONOUN_LEMMA};
pub use token::{AnnotatedToken, TokenAttributes};
