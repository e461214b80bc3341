//! Identity lemmatizer implementation.

use crate::analysis::lemmatizer::Lemmatizer;

/// Identity lemmatizer that returns words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
