//! Lemmatizers used by language pipelines to fill in token lemmas.

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its dictionary form.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

// Lemmatizer implementations
pub mod identity;
pub mod rule;

// Re-export lemmatizers
pub use identity::IdentityLemmatizer;
pub use rule::RuleLemmatizer;
