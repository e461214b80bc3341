//! Case folding and character-class helpers shared by the pipeline and the
//! token filter policy.

/// Lowercase a string, taking a byte-level path for pure ASCII input.
///
/// Blacklist, stopword and sentiment lookups lowercase every token they see,
/// and most tokens in English text are ASCII.
pub fn to_lowercase(input: &str) -> String {
    if input.is_ascii() {
        let mut lowered = input.to_owned();
        lowered.make_ascii_lowercase();
        lowered
    } else {
        input.to_lowercase()
    }
}

/// Number of Unicode scalar values in `input`.
pub fn char_len(input: &str) -> usize {
    if input.is_ascii() {
        input.len()
    } else {
        input.chars().count()
    }
}

/// True if `input` is non-empty and every character is a letter.
///
/// Letter-like numerals such as `Ⅻ` are alphabetic in Unicode but are
/// numbers, not letters.
pub fn is_alpha(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_alphabetic() && !c.is_numeric())
}

/// True if `input` is non-empty and every character is a decimal digit.
pub fn is_digit(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lowercase() {
        assert_eq!(to_lowercase("Hello WORLD"), "hello world");
        assert_eq!(to_lowercase("ÉCOLE"), "école");
        assert_eq!(to_lowercase(""), "");
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len("a"), 1);
        assert_eq!(char_len("é"), 1);
        assert_eq!(char_len("naïve"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_alpha("café"));
        assert!(!is_alpha("abc1"));
        assert!(!is_alpha(""));
        assert!(!is_alpha("Ⅻ"));

        assert!(is_digit("2024"));
        assert!(!is_digit("3.14"));
        assert!(!is_digit(""));
        assert!(!is_digit("½"));
        assert!(!is_digit("Ⅻ"));
    }
}
