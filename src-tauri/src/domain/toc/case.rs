//! Usage: Casing rules for table-of-contents entries (sentence case, title case, roman numerals).

use once_cell::sync::Lazy;
use regex::Regex;

/// Minor words kept lowercase by [`title_case`] unless they open the entry.
const TITLE_CASE_MINOR_WORDS: &[&str] = &[
    "and", "or", "but", "nor", "so", "for", "yet", "a", "an", "the", "in", "on", "at", "to", "by",
    "with", "of",
];

static ROMAN_NUMERAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("Invalid ROMAN_NUMERAL_REGEX pattern")
});

/// Lowercases the text, then uppercases the first ASCII letter of every `:`-separated part.
pub(crate) fn sentence_case(text: &str) -> String {
    text.split(':')
        .map(|part| {
            if part.trim().is_empty() {
                return part.to_string();
            }
            let lowered = part.to_lowercase();
            match lowered.find(|c: char| c.is_ascii_alphabetic()) {
                Some(idx) => {
                    let mut out = String::with_capacity(lowered.len());
                    out.push_str(&lowered[..idx]);
                    out.push_str(&lowered[idx..idx + 1].to_ascii_uppercase());
                    out.push_str(&lowered[idx + 1..]);
                    out
                }
                None => lowered,
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Collapses whitespace to single spaces.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lowered = word.to_lowercase();
            if i > 0 && TITLE_CASE_MINOR_WORDS.contains(&lowered.as_str()) {
                lowered
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive; front-matter pages are usually lowercase (`xii`).
pub(crate) fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty() && ROMAN_NUMERAL_REGEX.is_match(&word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_case_capitalizes_each_colon_part() {
        assert_eq!(
            sentence_case("THE HOBBIT: THERE AND BACK AGAIN"),
            "The hobbit: There and back again"
        );
    }

    #[test]
    fn sentence_case_skips_leading_non_letters() {
        assert_eq!(sentence_case("1. INTRODUCTION"), "1. Introduction");
        assert_eq!(sentence_case("\"QUOTED\" title"), "\"Quoted\" title");
    }

    #[test]
    fn sentence_case_keeps_blank_parts() {
        assert_eq!(sentence_case("Note:: END"), "Note:: End");
        assert_eq!(sentence_case(""), "");
        assert_eq!(sentence_case("123"), "123");
    }

    #[test]
    fn title_case_keeps_minor_words_lowercase() {
        assert_eq!(
            title_case("the lord OF the rings"),
            "The Lord of the Rings"
        );
        assert_eq!(title_case("  war   and peace "), "War and Peace");
    }

    #[test]
    fn roman_numerals_match_valid_forms_only() {
        for word in ["i", "IV", "xii", "XLII", "MCMXCIV"] {
            assert!(is_roman_numeral(word), "{word}");
        }
        for word in ["", "mild", "Civil", "did", "IIII", "12", "Intro"] {
            assert!(!is_roman_numeral(word), "{word}");
        }
    }
}
