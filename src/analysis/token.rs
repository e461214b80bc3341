//! Annotated tokens and the attribute interface the filter policy reads.
//!
//! A language pipeline turns a document into a sequence of [`AnnotatedToken`]s.
//! The token filter policy never inspects that struct directly; it reads
//! tokens through [`TokenAttributes`], so any pipeline (or a test fake) can
//! feed the policy with its own token type.
//!
//! # Examples
//!
//! ```
//! use lexsieve::analysis::token::{AnnotatedToken, TokenAttributes};
//!
//! let token = AnnotatedToken::new("Running", "run", "en")
//!     .with_alpha(true)
//!     .with_ascii(true);
//!
//! assert_eq!(token.text(), "Running");
//! assert_eq!(token.lemma(), "run");
//! assert!(token.is_alpha());
//! assert!(!token.like_url());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::PRONOUN_LEMMA;

/// Per-token linguistic attributes consumed by the token filter policy.
///
/// `is_pronoun` has a default implementation that compares the lemma against
/// [`PRONOUN_LEMMA`]. Pipelines that flag pronouns some other way override it.
pub trait TokenAttributes {
    /// Surface form as it appeared in the document.
    fn text(&self) -> &str;

    /// Canonical (dictionary) form.
    fn lemma(&self) -> &str;

    /// Language code assigned by the pipeline.
    fn language(&self) -> &str;

    /// Whether the pipeline's own stop list contains this token.
    fn is_stop(&self) -> bool;

    /// Whether the token resembles a URL.
    fn like_url(&self) -> bool;

    /// Whether every character is a digit.
    fn is_digit(&self) -> bool;

    /// Whether the token represents a number ("10", "3.5", "ten").
    fn like_num(&self) -> bool;

    /// Whether every character is alphabetic.
    fn is_alpha(&self) -> bool;

    /// Whether every character is ASCII.
    fn is_ascii(&self) -> bool;

    /// Whether the token is a pronoun.
    fn is_pronoun(&self) -> bool {
        self.lemma() == PRONOUN_LEMMA
    }
}

/// A token produced by a language pipeline, with its linguistic attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text
    pub text: String,

    /// Lemma form
    pub lemma: String,

    /// Language code (e.g. "en")
    pub language: String,

    /// Position of the token in the document's token sequence (0-based)
    pub position: usize,

    /// Byte offset where this token starts in the original text
    pub start_offset: usize,

    /// Byte offset where this token ends in the original text
    pub end_offset: usize,

    pub is_stop: bool,
    pub like_url: bool,
    pub is_digit: bool,
    pub like_num: bool,
    pub is_alpha: bool,
    pub is_ascii: bool,
}

impl AnnotatedToken {
    /// Create a token with the given text, lemma and language and all flags
    /// cleared.
    pub fn new<T, L, G>(text: T, lemma: L, language: G) -> Self
    where
        T: Into<String>,
        L: Into<String>,
        G: Into<String>,
    {
        AnnotatedToken {
            text: text.into(),
            lemma: lemma.into(),
            language: language.into(),
            position: 0,
            start_offset: 0,
            end_offset: 0,
            is_stop: false,
            like_url: false,
            is_digit: false,
            like_num: false,
            is_alpha: false,
            is_ascii: false,
        }
    }

    /// Set the token position and byte offsets.
    pub fn with_offsets(mut self, position: usize, start_offset: usize, end_offset: usize) -> Self {
        self.position = position;
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    pub fn with_url(mut self, like_url: bool) -> Self {
        self.like_url = like_url;
        self
    }

    pub fn with_digit(mut self, is_digit: bool) -> Self {
        self.is_digit = is_digit;
        self
    }

    pub fn with_num(mut self, like_num: bool) -> Self {
        self.like_num = like_num;
        self
    }

    pub fn with_alpha(mut self, is_alpha: bool) -> Self {
        self.is_alpha = is_alpha;
        self
    }

    pub fn with_ascii(mut self, is_ascii: bool) -> Self {
        self.is_ascii = is_ascii;
        self
    }

    /// Get the byte length of the surface text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the surface text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TokenAttributes for AnnotatedToken {
    fn text(&self) -> &str {
        &self.text
    }

    fn lemma(&self) -> &str {
        &self.lemma
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn is_stop(&self) -> bool {
        self.is_stop
    }

    fn like_url(&self) -> bool {
        self.like_url
    }

    fn is_digit(&self) -> bool {
        self.is_digit
    }

    fn like_num(&self) -> bool {
        self.like_num
    }

    fn is_alpha(&self) -> bool {
        self.is_alpha
    }

    fn is_ascii(&self) -> bool {
        self.is_ascii
    }
}

impl fmt::Display for AnnotatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
