//! Lightweight English language pipeline.
//!
//! Text is split on Unicode word boundaries (UAX #29) after a URL pre-pass, so
//! `http://example.com/a?b=c` survives as a single token. Whitespace segments
//! are dropped; punctuation and symbols are kept as tokens of their own so
//! the filter policy can decide what to do with them.
//!
//! # Examples
//!
//! ```
//! use lexsieve::analysis::pipeline::{EnglishPipeline, LanguagePipeline, PRONOUN_LEMMA};
//!
//! let pipeline = EnglishPipeline::new();
//! let tokens = pipeline.tokenize("She loved http://example.com!").unwrap();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["She", "loved", "http://example.com", "!"]);
//! assert_eq!(tokens[0].lemma, PRONOUN_LEMMA);
//! assert_eq!(tokens[1].lemma, "love");
//! assert!(tokens[2].like_url);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::lemmatizer::{Lemmatizer, RuleLemmatizer};
use crate::analysis::pipeline::{LanguagePipeline, PRONOUN_LEMMA};
use crate::analysis::token::AnnotatedToken;
use crate::error::{LexsieveError, Result};
use crate::util::text;

/// Stop words flagged through `is_stop`, independent of any stopword list the
/// filter policy loads.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "be", "became", "because", "become", "becomes",
    "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside", "besides",
    "between", "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
    "doing", "done", "down", "due", "during", "each", "either", "else", "elsewhere", "enough",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few", "for",
    "former", "formerly", "from", "further", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just",
    "latter", "latterly", "least", "less", "many", "may", "me", "meanwhile", "might", "mine",
    "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither",
    "never", "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "please", "quite", "rather", "really", "same", "seem", "seemed", "seeming", "seems",
    "several", "she", "should", "since", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "this", "those", "though", "through", "throughout",
    "thru", "thus", "to", "together", "too", "toward", "towards", "under", "unless", "until",
    "up", "upon", "us", "very", "via", "was", "we", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Personal pronouns that receive [`PRONOUN_LEMMA`] instead of a real lemma.
const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "quadrillion", "gajillion",
    "bazillion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth",
    "fiftieth", "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth", "thousandth",
    "millionth", "billionth", "trillionth",
];

const URL_TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "io", "co", "ai", "app", "dev", "info",
    "biz", "me", "tv", "uk", "us", "de", "fr", "jp", "cn", "ru", "nl", "au", "ca", "it", "es",
    "br", "in", "ch", "se", "no", "eu", "ly", "gl", "rs",
];

static ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

static PERSONAL_PRONOUNS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| PERSONAL_PRONOUNS.iter().copied().collect());

static NUMBER_WORDS_SET: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    NUMBER_WORDS
        .iter()
        .chain(ORDINAL_WORDS.iter())
        .copied()
        .collect()
});

static URL_TOP_LEVEL_DOMAINS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| URL_TOP_LEVEL_DOMAINS.iter().copied().collect());

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"']+"#)
        .expect("URL pattern should be valid")
});

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+\-±~]?(?:\d+(?:[.,]\d+)*|\d+/\d+|\d+(?:st|nd|rd|th))$")
        .expect("number pattern should be valid")
});

/// English pipeline built on Unicode word segmentation and a rule lemmatizer.
#[derive(Clone)]
pub struct EnglishPipeline {
    /// Lemmatizer applied to word tokens
    lemmatizer: Arc<dyn Lemmatizer>,

    /// Language code assigned to every token
    language: String,

    /// Documents longer than this (in bytes) fail to tokenize
    max_document_len: Option<usize>,
}

impl std::fmt::Debug for EnglishPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishPipeline")
            .field("lemmatizer", &self.lemmatizer.name())
            .field("language", &self.language)
            .field("max_document_len", &self.max_document_len)
            .finish()
    }
}

impl Default for EnglishPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishPipeline {
    /// Create a pipeline with the rule lemmatizer and language `"en"`.
    pub fn new() -> Self {
        EnglishPipeline {
            lemmatizer: Arc::new(RuleLemmatizer::new()),
            language: "en".to_string(),
            max_document_len: None,
        }
    }

    /// Use a different lemmatizer.
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Assign a different language code to produced tokens.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Reject documents longer than `max_len` bytes.
    pub fn with_max_document_len(mut self, max_len: usize) -> Self {
        self.max_document_len = Some(max_len);
        self
    }

    /// Split `text` into `(byte offset, segment)` pairs, URLs first.
    fn segments<'a>(text: &'a str) -> Vec<(usize, &'a str)> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for mat in URL_PATTERN.find_iter(text) {
            let url = mat
                .as_str()
                .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '}']);
            if mat.start() > last_end {
                Self::push_words(&text[last_end..mat.start()], last_end, &mut segments);
            }
            segments.push((mat.start(), url));
            last_end = mat.start() + url.len();
        }

        if last_end < text.len() {
            Self::push_words(&text[last_end..], last_end, &mut segments);
        }

        segments
    }

    fn push_words<'a>(text: &'a str, base: usize, segments: &mut Vec<(usize, &'a str)>) {
        segments.extend(
            text.split_word_bound_indices()
                .filter(|(_, word)| !word.chars().all(char::is_whitespace))
                .map(|(offset, word)| (base + offset, word)),
        );
    }

    fn annotate(&self, word: &str, position: usize, start_offset: usize) -> AnnotatedToken {
        let lower = text::to_lowercase(word);
        let like_url = like_url(word);
        let like_num = like_num(&lower);
        let is_alpha = text::is_alpha(word);

        let lemma = if PERSONAL_PRONOUNS_SET.contains(lower.as_str()) {
            PRONOUN_LEMMA.to_string()
        } else if is_alpha {
            self.lemmatizer.lemmatize(&lower)
        } else {
            word.to_string()
        };

        AnnotatedToken::new(word, lemma, self.language.as_str())
            .with_offsets(position, start_offset, start_offset + word.len())
            .with_stop(ENGLISH_STOP_WORDS_SET.contains(lower.as_str()))
            .with_url(like_url)
            .with_digit(text::is_digit(word))
            .with_num(like_num)
            .with_alpha(is_alpha)
            .with_ascii(word.is_ascii())
    }
}

impl LanguagePipeline for EnglishPipeline {
    fn tokenize(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        if let Some(max_len) = self.max_document_len
            && text.len() > max_len
        {
            return Err(LexsieveError::analysis(format!(
                "document of {} bytes exceeds the {max_len} byte limit",
                text.len()
            )));
        }

        Ok(Self::segments(text)
            .into_iter()
            .enumerate()
            .map(|(position, (offset, word))| self.annotate(word, position, offset))
            .collect())
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

/// Whether `word` looks like a URL: a scheme or `www.` prefix, or a dotted
/// host ending in a known top-level domain.
fn like_url(word: &str) -> bool {
    let lower = text::to_lowercase(word);
    if ["http://", "https://", "ftp://", "www."]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return true;
    }
    if lower.starts_with('.') || lower.ends_with('.') || !lower.contains('.') {
        return false;
    }
    if lower.contains('@') {
        return false;
    }

    let host = lower.split(['/', '?', '#']).next().unwrap_or_default();
    host.rsplit('.')
        .next()
        .is_some_and(|tld| URL_TOP_LEVEL_DOMAINS_SET.contains(tld))
}

/// Whether the lowercased `word` represents a number.
fn like_num(lower: &str) -> bool {
    NUMBER_PATTERN.is_match(lower) || NUMBER_WORDS_SET.contains(lower)
}
