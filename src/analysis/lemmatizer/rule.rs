//! Rule-based English lemmatizer.
//!
//! Irregular forms are looked up in a table; everything else goes through a
//! small set of inflectional suffix rules (`-ies`, `-ing`, `-ed`, `-es`, `-s`)
//! with consonant undoubling and silent-`e` restoration:
//!
//! ```text
//! running -> runn -> run
//! loving  -> lov  -> love
//! studies -> stud -> study
//! boxes   -> box
//! ```
//!
//! # Examples
//!
//! ```
//! use lexsieve::analysis::lemmatizer::{Lemmatizer, RuleLemmatizer};
//!
//! let lemmatizer = RuleLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("running"), "run");
//! assert_eq!(lemmatizer.lemmatize("went"), "go");
//! assert_eq!(lemmatizer.lemmatize("stores"), "store");
//! ```

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

use crate::analysis::lemmatizer::Lemmatizer;
use crate::util::text;

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("felt", "feel"),
    ("left", "leave"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("sent", "send"),
    ("spent", "spend"),
    ("built", "build"),
    ("held", "hold"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("sat", "sit"),
    ("met", "meet"),
    ("paid", "pay"),
    ("lost", "lose"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("broke", "break"),
    ("broken", "break"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("slept", "sleep"),
    ("meant", "mean"),
    ("heard", "hear"),
    ("agreed", "agree"),
    ("freed", "free"),
    ("used", "use"),
    ("uses", "use"),
    ("using", "use"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Words that look inflected but are already in dictionary form.
const INVARIANT_FORMS: &[&str] = &[
    "always",
    "anything",
    "besides",
    "ceiling",
    "christmas",
    "during",
    "economics",
    "evening",
    "everything",
    "lens",
    "mathematics",
    "morning",
    "news",
    "nothing",
    "perhaps",
    "physics",
    "politics",
    "series",
    "something",
    "species",
    "wedding",
    "whereas",
];

static IRREGULAR_FORMS_MAP: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

static INVARIANT_FORMS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| INVARIANT_FORMS.iter().copied().collect());

/// Rule-based lemmatizer for English.
///
/// Input is lowercased first. Words containing anything other than ASCII
/// letters are returned lowercased but otherwise untouched.
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    /// Create a new rule lemmatizer.
    pub fn new() -> Self {
        RuleLemmatizer
    }

    fn strip_inflection(word: &str) -> Option<String> {
        if word.ends_with("eed") {
            return None;
        }

        for suffix in ["ies", "ied"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 2 {
                    return Some(format!("{stem}y"));
                }
            }
        }

        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 2 && has_vowel(stem) {
                return Some(restore_verb_stem(stem));
            }
        }

        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 && has_vowel(stem) {
                return Some(restore_verb_stem(stem));
            }
        }

        if let Some(stem) = word.strip_suffix("es") {
            if ["sh", "ch", "ss", "zz", "x"]
                .iter()
                .any(|ending| stem.ends_with(ending))
            {
                return Some(stem.to_string());
            }
        }

        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|e| word.ends_with(e)) {
            return Some(word[..word.len() - 1].to_string());
        }

        None
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let word = text::to_lowercase(word);

        if let Some(lemma) = IRREGULAR_FORMS_MAP.get(word.as_str()) {
            return (*lemma).to_string();
        }
        if word.len() <= 3
            || !word.bytes().all(|b| b.is_ascii_lowercase())
            || INVARIANT_FORMS_SET.contains(word.as_str())
        {
            return word;
        }

        Self::strip_inflection(&word).unwrap_or(word)
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

/// Per-byte vowel flags. `y` is a vowel when it follows a consonant, so a run
/// of `y`s alternates starting with consonant.
fn vowel_mask(word: &str) -> Vec<bool> {
    let mut mask = Vec::with_capacity(word.len());
    let mut prev_vowel = false;
    for (i, &b) in word.as_bytes().iter().enumerate() {
        let vowel = match b {
            b'a' | b'e' | b'i' | b'o' | b'u' => true,
            b'y' => i > 0 && !prev_vowel,
            _ => false,
        };
        mask.push(vowel);
        prev_vowel = vowel;
    }
    mask
}

fn has_vowel(word: &str) -> bool {
    vowel_mask(word).contains(&true)
}

fn vowel_groups(mask: &[bool]) -> usize {
    (0..mask.len())
        .filter(|&i| mask[i] && (i == 0 || !mask[i - 1]))
        .count()
}

/// consonant-vowel-consonant ending, last consonant not w/x/y
fn ends_cvc(bytes: &[u8], mask: &[bool]) -> bool {
    let n = bytes.len();
    n >= 3
        && !mask[n - 3]
        && mask[n - 2]
        && !mask[n - 1]
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

/// Undo the spelling changes English applies before `-ing` / `-ed`.
fn restore_verb_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let mask = vowel_mask(stem);
    let n = bytes.len();
    let last = bytes[n - 1];

    let doubled = n >= 3
        && last == bytes[n - 2]
        && !mask[n - 1]
        && !matches!(last, b'l' | b's' | b'z')
        && !mask[0];

    if doubled {
        stem[..n - 1].to_string()
    } else if ends_cvc(bytes, &mask) && vowel_groups(&mask) == 1 {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_inflections() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("stopped"), "stop");
        assert_eq!(lemmatizer.lemmatize("walked"), "walk");
        assert_eq!(lemmatizer.lemmatize("walking"), "walk");
        assert_eq!(lemmatizer.lemmatize("loved"), "love");
        assert_eq!(lemmatizer.lemmatize("making"), "make");
        assert_eq!(lemmatizer.lemmatize("writing"), "write");
        assert_eq!(lemmatizer.lemmatize("visiting"), "visit");
        assert_eq!(lemmatizer.lemmatize("falling"), "fall");
        assert_eq!(lemmatizer.lemmatize("added"), "add");
        assert_eq!(lemmatizer.lemmatize("tried"), "try");
    }

    #[test]
    fn test_plural_inflections() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("flies"), "fly");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("stores"), "store");
        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("was"), "be");
        assert_eq!(lemmatizer.lemmatize("is"), "be");
        assert_eq!(lemmatizer.lemmatize("went"), "go");
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("Thought"), "think");
    }

    #[test]
    fn test_words_left_alone() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("during"), "during");
        assert_eq!(lemmatizer.lemmatize("news"), "news");
        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("status"), "status");
        assert_eq!(lemmatizer.lemmatize("thing"), "thing");
        assert_eq!(lemmatizer.lemmatize("need"), "need");
        assert_eq!(lemmatizer.lemmatize("speed"), "speed");
        assert_eq!(lemmatizer.lemmatize("love"), "love");
        assert_eq!(lemmatizer.lemmatize("store"), "store");
        assert_eq!(lemmatizer.lemmatize("cat"), "cat");
        assert_eq!(lemmatizer.lemmatize("cafés"), "cafés");
    }

    #[test]
    fn test_lowercases_input() {
        let lemmatizer = RuleLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("Running"), "run");
        assert_eq!(lemmatizer.lemmatize("Hello"), "hello");
    }

    #[test]
    fn test_long_runs_of_y() {
        let lemmatizer = RuleLemmatizer::new();
        let word = format!("{}ed", "y".repeat(100_000));

        assert_eq!(lemmatizer.lemmatize(&word), "y".repeat(100_000));
        assert_eq!(lemmatizer.lemmatize("played"), "play");
        assert_eq!(lemmatizer.lemmatize("stayed"), "stay");
    }

    #[test]
    fn test_lemmatizer_name() {
        assert_eq!(RuleLemmatizer::new().name(), "rule");
    }
}
