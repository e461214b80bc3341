//! The per-token keep/drop decision.
//!
//! [`TokenFilterPolicy`] combines a [`FilterConfiguration`] with the loaded
//! [`WordLists`] and answers one question per token: should it be dropped?
//! Checks run in a fixed order and short-circuit on the first match; since
//! every check is an independent predicate, the order only affects which
//! [`UnwantedReason`] is reported, never whether a token is dropped.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenAttributes;
use crate::cleaner::config::FilterConfiguration;
use crate::cleaner::word_lists::WordLists;
use crate::util::text;

/// The rule that caused a token to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnwantedReason {
    Language,
    Blacklisted,
    Stopword,
    Url,
    Digit,
    Number,
    Pronoun,
    NonAlpha,
    NonAscii,
    SingleCharacter,
    SentimentWord,
}

impl UnwantedReason {
    /// Every reason, in evaluation order.
    pub const ALL: [UnwantedReason; 11] = [
        UnwantedReason::Language,
        UnwantedReason::Blacklisted,
        UnwantedReason::Stopword,
        UnwantedReason::Url,
        UnwantedReason::Digit,
        UnwantedReason::Number,
        UnwantedReason::Pronoun,
        UnwantedReason::NonAlpha,
        UnwantedReason::NonAscii,
        UnwantedReason::SingleCharacter,
        UnwantedReason::SentimentWord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnwantedReason::Language => "language",
            UnwantedReason::Blacklisted => "blacklisted",
            UnwantedReason::Stopword => "stopword",
            UnwantedReason::Url => "url",
            UnwantedReason::Digit => "digit",
            UnwantedReason::Number => "number",
            UnwantedReason::Pronoun => "pronoun",
            UnwantedReason::NonAlpha => "non_alpha",
            UnwantedReason::NonAscii => "non_ascii",
            UnwantedReason::SingleCharacter => "single_character",
            UnwantedReason::SentimentWord => "sentiment_word",
        }
    }
}

impl fmt::Display for UnwantedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Decides, per token, whether to keep or drop it.
///
/// The policy is immutable after construction and `Send + Sync`, so a single
/// instance can be shared by any number of concurrent filtering passes.
///
/// # Examples
///
/// ```
/// use lexsieve::analysis::token::AnnotatedToken;
/// use lexsieve::cleaner::{FilterConfiguration, TokenFilterPolicy, UnwantedReason, WordLists};
///
/// let config = FilterConfiguration::all_disabled().with_token_blacklist(["rt"]);
/// let policy = TokenFilterPolicy::new(config, WordLists::empty());
///
/// let token = AnnotatedToken::new("RT", "rt", "en");
/// assert!(policy.is_unwanted(&token));
/// assert_eq!(policy.check(&token), Some(UnwantedReason::Blacklisted));
/// ```
#[derive(Debug, Clone)]
pub struct TokenFilterPolicy {
    config: FilterConfiguration,
    word_lists: Arc<WordLists>,
    language_whitelist: AHashSet<String>,
    token_blacklist: AHashSet<String>,
}

impl TokenFilterPolicy {
    /// Create a policy from a configuration and already-loaded word lists.
    pub fn new(config: FilterConfiguration, word_lists: WordLists) -> Self {
        Self::with_shared_lists(config, Arc::new(word_lists))
    }

    /// Create a policy that shares word lists with other policies.
    pub fn with_shared_lists(config: FilterConfiguration, word_lists: Arc<WordLists>) -> Self {
        let language_whitelist = config.language_whitelist.iter().cloned().collect();
        let token_blacklist = config
            .token_blacklist
            .iter()
            .map(|token| text::to_lowercase(token))
            .collect();

        TokenFilterPolicy {
            config,
            word_lists,
            language_whitelist,
            token_blacklist,
        }
    }

    /// Create a policy, loading the word lists the configuration enables.
    pub fn load(config: FilterConfiguration) -> Self {
        let word_lists = WordLists::load(&config);
        Self::new(config, word_lists)
    }

    pub fn config(&self) -> &FilterConfiguration {
        &self.config
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.word_lists
    }

    /// True if any enabled rule matches the token.
    pub fn is_unwanted<T: TokenAttributes + ?Sized>(&self, token: &T) -> bool {
        self.check(token).is_some()
    }

    /// The first enabled rule that matches the token, if any.
    pub fn check<T: TokenAttributes + ?Sized>(&self, token: &T) -> Option<UnwantedReason> {
        let config = &self.config;

        if !self.language_whitelist.is_empty()
            && !self.language_whitelist.contains(token.language())
        {
            return Some(UnwantedReason::Language);
        }

        // Lowercased once for the blacklist, stopword and sentiment lookups.
        let lower = text::to_lowercase(token.text());

        if !self.token_blacklist.is_empty() && self.token_blacklist.contains(&lower) {
            return Some(UnwantedReason::Blacklisted);
        }
        if config.filter_stopwords && (token.is_stop() || self.word_lists.is_stopword(&lower)) {
            return Some(UnwantedReason::Stopword);
        }
        if config.filter_url && token.like_url() {
            return Some(UnwantedReason::Url);
        }
        if config.filter_digit && token.is_digit() {
            return Some(UnwantedReason::Digit);
        }
        if config.filter_number && token.like_num() {
            return Some(UnwantedReason::Number);
        }
        if config.filter_pronoun && token.is_pronoun() {
            return Some(UnwantedReason::Pronoun);
        }
        if config.filter_non_alpha && !token.is_alpha() {
            return Some(UnwantedReason::NonAlpha);
        }
        if config.filter_non_ascii && !token.is_ascii() {
            return Some(UnwantedReason::NonAscii);
        }
        if config.filter_character && text::char_len(token.text()) <= 1 {
            return Some(UnwantedReason::SingleCharacter);
        }
        if config.filter_sentiment_words && self.word_lists.is_sentiment_word(&lower) {
            return Some(UnwantedReason::SentimentWord);
        }

        None
    }

    /// Project a surviving token to its output form: lemma or surface text,
    /// lowercased if configured.
    pub fn project<T: TokenAttributes + ?Sized>(&self, token: &T) -> String {
        let form = if self.config.lemmatize {
            token.lemma()
        } else {
            token.text()
        };

        if self.config.lowercase {
            text::to_lowercase(form)
        } else {
            form.to_string()
        }
    }

    /// Filter a token sequence and project the survivors, preserving order.
    pub fn apply<'a, T, I>(&self, tokens: I) -> Vec<String>
    where
        T: TokenAttributes + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        tokens
            .into_iter()
            .filter(|token| !self.is_unwanted(*token))
            .map(|token| self.project(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pipeline::PRONOUN_LEMMA;
    use crate::analysis::token::AnnotatedToken;

    /// A plain ASCII word that no rule matches.
    fn word(text: &str) -> AnnotatedToken {
        AnnotatedToken::new(text, text, "en")
            .with_alpha(true)
            .with_ascii(true)
    }

    fn policy(config: FilterConfiguration) -> TokenFilterPolicy {
        TokenFilterPolicy::new(config, WordLists::empty())
    }

    /// One case per rule: a config enabling only that rule, the same config
    /// with it disabled, a token that triggers only that rule, and the
    /// word lists it needs. Flags are set so no other rule can fire.
    fn rule_cases() -> Vec<(
        UnwantedReason,
        FilterConfiguration,
        FilterConfiguration,
        AnnotatedToken,
        WordLists,
    )> {
        let off = FilterConfiguration::all_disabled;
        vec![
            (
                UnwantedReason::Language,
                off().with_language_whitelist(["en"]),
                off(),
                AnnotatedToken::new("hallo", "hallo", "de")
                    .with_alpha(true)
                    .with_ascii(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Blacklisted,
                off().with_token_blacklist(["rt"]),
                off(),
                word("RT"),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Stopword,
                off().with_filter_stopwords(true),
                off(),
                word("the").with_stop(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Stopword,
                off().with_filter_stopwords(true),
                off(),
                word("Whilst"),
                WordLists::new(["whilst"], Vec::<String>::new(), Vec::<String>::new()),
            ),
            (
                UnwantedReason::Url,
                off().with_filter_url(true),
                off(),
                AnnotatedToken::new("example.com", "example.com", "en")
                    .with_url(true)
                    .with_alpha(true)
                    .with_ascii(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Digit,
                off().with_filter_digit(true),
                off(),
                AnnotatedToken::new("42", "42", "en")
                    .with_digit(true)
                    .with_alpha(true)
                    .with_ascii(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Number,
                off().with_filter_number(true),
                off(),
                word("ten").with_num(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::Pronoun,
                off().with_filter_pronoun(true),
                off(),
                AnnotatedToken::new("She", PRONOUN_LEMMA, "en")
                    .with_alpha(true)
                    .with_ascii(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::NonAlpha,
                off().with_filter_non_alpha(true),
                off(),
                AnnotatedToken::new("!!", "!!", "en").with_ascii(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::NonAscii,
                off().with_filter_non_ascii(true),
                off(),
                AnnotatedToken::new("café", "café", "en").with_alpha(true),
                WordLists::empty(),
            ),
            (
                UnwantedReason::SingleCharacter,
                off().with_filter_character(true),
                off(),
                word("x"),
                WordLists::empty(),
            ),
            (
                UnwantedReason::SentimentWord,
                off().with_filter_sentiment_words(true),
                off(),
                word("Good"),
                WordLists::new(Vec::<String>::new(), ["good"], Vec::<String>::new()),
            ),
        ]
    }

    #[test]
    fn test_each_rule_drops_only_when_enabled() {
        for (reason, enabled, disabled, token, lists) in rule_cases() {
            let on = TokenFilterPolicy::new(enabled, lists.clone());
            let off = TokenFilterPolicy::new(disabled, lists);

            assert_eq!(on.check(&token), Some(reason), "{reason} enabled");
            assert!(on.is_unwanted(&token));
            assert_eq!(off.check(&token), None, "{reason} disabled");
        }
    }

    #[test]
    fn test_rule_tokens_only_trigger_their_own_rule() {
        let cases = rule_cases();
        for (reason, enabled, _, _, lists) in &cases {
            let policy = TokenFilterPolicy::new(enabled.clone(), lists.clone());
            for (other, _, _, token, _) in &cases {
                if other != reason {
                    assert!(
                        !policy.is_unwanted(token),
                        "{reason} should not fire on the {other} token"
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_disabled_keeps_everything() {
        let policy = policy(FilterConfiguration::all_disabled());
        for (_, _, _, token, _) in rule_cases() {
            assert!(!policy.is_unwanted(&token));
        }
    }

    #[test]
    fn test_empty_collections_disable_checks() {
        let policy = policy(
            FilterConfiguration::all_disabled()
                .with_language_whitelist(Vec::<String>::new())
                .with_token_blacklist(Vec::<String>::new()),
        );
        let token = AnnotatedToken::new("rt", "rt", "");

        assert!(!policy.is_unwanted(&token));
    }

    #[test]
    fn test_blacklist_is_case_insensitive() {
        let policy = policy(FilterConfiguration::all_disabled().with_token_blacklist(["OC"]));

        assert!(policy.is_unwanted(&word("oc")));
        assert!(policy.is_unwanted(&word("Oc")));
        assert!(!policy.is_unwanted(&word("occ")));
    }

    #[test]
    fn test_single_character_counts_chars() {
        let policy = policy(FilterConfiguration::all_disabled().with_filter_character(true));

        assert!(policy.is_unwanted(&AnnotatedToken::new("é", "é", "en")));
        assert!(policy.is_unwanted(&AnnotatedToken::new("", "", "en")));
        assert!(!policy.is_unwanted(&AnnotatedToken::new("éa", "éa", "en")));
    }

    #[test]
    fn test_first_matching_rule_is_reported() {
        let policy = policy(FilterConfiguration::default());
        let token = AnnotatedToken::new("I", PRONOUN_LEMMA, "en")
            .with_stop(true)
            .with_alpha(true)
            .with_ascii(true);

        assert_eq!(policy.check(&token), Some(UnwantedReason::Stopword));
    }

    #[test]
    fn test_project() {
        let token = AnnotatedToken::new("Running", "run", "en");

        let p = policy(FilterConfiguration::all_disabled());
        assert_eq!(p.project(&token), "Running");

        let p = policy(FilterConfiguration::all_disabled().with_lowercase(true));
        assert_eq!(p.project(&token), "running");

        let p = policy(FilterConfiguration::all_disabled().with_lemmatize(true));
        assert_eq!(p.project(&token), "run");
    }

    #[test]
    fn test_apply_preserves_order() {
        let policy = policy(FilterConfiguration::all_disabled().with_filter_character(true));
        let tokens = vec![word("alpha"), word("b"), word("gamma"), word("d"), word("epsilon")];

        assert_eq!(policy.apply(&tokens), vec!["alpha", "gamma", "epsilon"]);
    }

    #[test]
    fn test_policy_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenFilterPolicy>();
    }

    #[test]
    fn test_reason_names() {
        assert_eq!(UnwantedReason::ALL.len(), 11);
        assert_eq!(UnwantedReason::NonAlpha.to_string(), "non_alpha");
        assert_eq!(
            serde_json::to_string(&UnwantedReason::SingleCharacter).unwrap(),
            "\"single_character\""
        );
    }
}
