//! Word-level rewrites.
//!
//! Word-based effects split on any whitespace and rejoin with single spaces,
//! so runs of whitespace and newlines collapse.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading non-letters, letters, trailing non-letters
static WORD_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^a-zA-Z]*)([a-zA-Z]+)([^a-zA-Z]*)$").expect("valid word pattern")
});

pub fn backwards(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn reverse_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `hello` becomes `h-h-hello`; short or non-alphabetic words are kept.
pub fn stutter(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first)
                    if word.chars().count() > 2 && word.chars().all(char::is_alphabetic) =>
                {
                    format!("{first}-{first}-{word}")
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Izzle speak. Punctuation around a word stays where it is.
pub fn shizzle(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    text.split_whitespace()
        .map(|word| match WORD_PARTS.captures(word) {
            Some(caps) => format!("{}{}izzle{}", &caps[1], &caps[2], &caps[3]),
            None => word.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backwards() {
        assert_eq!(backwards("Hello"), "olleH");
        assert_eq!(backwards("Hello World"), "dlroW olleH");
        assert_eq!(backwards(&backwards("naïve café")), "naïve café");
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("hello world"), "olleh dlrow");
        assert_eq!(reverse_words("  spaced   out \n"), "decaps tuo");
    }

    #[test]
    fn test_stutter() {
        assert_eq!(stutter("hello world"), "h-h-hello w-w-world");
        assert_eq!(stutter("hi ok"), "hi ok");
        assert_eq!(stutter("wow 123 abc1"), "w-w-wow 123 abc1");
    }

    #[test]
    fn test_shizzle() {
        assert_eq!(shizzle("hello world!"), "helloizzle worldizzle!");
        assert_eq!(shizzle("\"quoted\""), "\"quotedizzle\"");
    }

    #[test]
    fn test_shizzle_mixed_words_unchanged() {
        assert_eq!(shizzle("r2d2 42"), "r2d2 42");
    }

    #[test]
    fn test_shizzle_blank_input_unchanged() {
        assert_eq!(shizzle(""), "");
        assert_eq!(shizzle("   \n"), "   \n");
    }
}
