//! Usage: Text cleanup passes for pasted or OCR'd tables of contents.
//!
//! - `clean_text`: drops page numbers and roman numerals, sentence-cases each line, drops lines
//!   without letters.
//! - `process_text`: page-number removal plus OCR artifact removal, line by line.
//! - `remove_chapter_headings`: drops lines that are only "Chapter" plus a number/punctuation.

use super::case::{is_roman_numeral, sentence_case};
use once_cell::sync::Lazy;
use regex::Regex;

/// A bare number is kept when the word before it contains one of these.
const NUMBERED_HEADING_WORDS: &[&str] = &["chap", "part", "sect", "unit"];

static CHAPTER_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*chapter\s*[^a-z]*$").expect("Invalid CHAPTER_HEADING_REGEX pattern")
});

fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn follows_numbered_heading(prev: &str) -> bool {
    let prev = prev.to_lowercase();
    NUMBERED_HEADING_WORDS.iter().any(|w| prev.contains(w))
}

/// Whitespace-separated words with bare page numbers removed.
///
/// A number in first position is kept, as is any number right after a heading word
/// (`Chapter 3`, `Part 2`).
fn strip_page_number_words(line: &str) -> Vec<&str> {
    let words: Vec<&str> = line.split_whitespace().collect();
    words
        .iter()
        .enumerate()
        .filter(|(i, word)| *i == 0 || !is_number(word) || follows_numbered_heading(words[i - 1]))
        .map(|(_, word)| *word)
        .collect()
}

pub(crate) fn remove_page_numbers(line: &str) -> String {
    strip_page_number_words(line).join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_artifact_char(c: char) -> bool {
    !c.is_alphanumeric()
}

fn word_at(chars: &[char], idx: Option<usize>) -> bool {
    idx.and_then(|i| chars.get(i)).is_some_and(|c| is_word_char(*c))
}

/// Replaces stray punctuation that does not touch a word with spaces, then collapses whitespace.
///
/// `"Intro . . . 12 | Ch-1"` keeps `Ch-1` (the dash touches letters) and drops the dots and bar.
pub(crate) fn remove_ocr_artifacts(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();

    // Single stray characters.
    let pass: Vec<char> = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let isolated = !word_at(&chars, i.checked_sub(1)) && !word_at(&chars, Some(i + 1));
            if is_artifact_char(c) && isolated {
                ' '
            } else {
                c
            }
        })
        .collect();

    // Runs of two or three stray characters (e.g. `__`).
    let mut out = String::with_capacity(pass.len());
    let mut i = 0;
    while i < pass.len() {
        let replaced = (i == 0 || !is_word_char(pass[i - 1]))
            .then(|| {
                [3usize, 2].into_iter().find(|&len| {
                    i + len <= pass.len()
                        && pass[i..i + len].iter().all(|c| is_artifact_char(*c) || *c == '_')
                        && !word_at(&pass, Some(i + len))
                })
            })
            .flatten();
        match replaced {
            Some(len) => {
                out.push(' ');
                i += len;
            }
            None => {
                out.push(pass[i]);
                i += 1;
            }
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Non-empty lines after page-number and artifact removal.
pub(crate) fn process_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| remove_ocr_artifacts(&remove_page_numbers(line)))
        .filter(|line| !line.is_empty())
        .collect()
}

pub(crate) fn clean_text(text: &str) -> String {
    text.trim()
        .lines()
        .filter_map(|line| {
            let words: Vec<&str> = strip_page_number_words(line)
                .into_iter()
                .filter(|word| !is_roman_numeral(word))
                .collect();
            if words.is_empty() {
                return None;
            }
            let cleaned = sentence_case(&words.join(" "));
            cleaned
                .chars()
                .any(|c| c.is_ascii_alphabetic())
                .then_some(cleaned)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn remove_chapter_headings(text: &str) -> String {
    text.trim()
        .lines()
        .filter(|line| !CHAPTER_HEADING_REGEX.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_page_numbers_drops_trailing_and_inner_numbers() {
        assert_eq!(remove_page_numbers("Introduction 1"), "Introduction");
        assert_eq!(remove_page_numbers("Early years 12 34"), "Early years");
        assert_eq!(remove_page_numbers("  Preface   vii  "), "Preface vii");
    }

    #[test]
    fn remove_page_numbers_keeps_heading_numbers() {
        assert_eq!(remove_page_numbers("Chapter 3 The storm 45"), "Chapter 3 The storm");
        assert_eq!(remove_page_numbers("PART 2 Aftermath 101"), "PART 2 Aftermath");
        assert_eq!(remove_page_numbers("Section 4"), "Section 4");
        assert_eq!(remove_page_numbers("1984 revisited 7"), "1984 revisited");
    }

    #[test]
    fn remove_ocr_artifacts_drops_isolated_punctuation() {
        assert_eq!(remove_ocr_artifacts("Intro . . . | end"), "Intro end");
        assert_eq!(remove_ocr_artifacts("- Prologue"), "Prologue");
        assert_eq!(remove_ocr_artifacts("a -- b"), "a b");
    }

    #[test]
    fn remove_ocr_artifacts_keeps_punctuation_touching_words() {
        assert_eq!(remove_ocr_artifacts("Ch-1, the end."), "Ch-1, the end.");
        assert_eq!(remove_ocr_artifacts("Who's there?"), "Who's there?");
    }

    #[test]
    fn remove_ocr_artifacts_drops_short_underscore_runs() {
        assert_eq!(remove_ocr_artifacts("Title __ Author"), "Title Author");
    }

    #[test]
    fn process_text_cleans_each_line_and_drops_empty_ones() {
        let input = "Contents\n\n Introduction . . . 1\n ~ \nChapter 2 Rain 14\n";
        assert_eq!(
            process_text(input),
            vec!["Contents", "Introduction", "Chapter 2 Rain"]
        );
    }

    #[test]
    fn clean_text_drops_numbers_roman_numerals_and_letterless_lines() {
        let input = "PREFACE xi\nCHAPTER 1 THE BEGINNING 3\n12\n--- 14\nUnit 5: REVIEW 88";
        assert_eq!(
            clean_text(input),
            "Preface\nChapter 1 the beginning\nUnit 5: Review"
        );
    }

    #[test]
    fn clean_text_keeps_leading_numbers() {
        assert_eq!(clean_text("1 HISTORY 9"), "1 History");
    }

    #[test]
    fn remove_chapter_headings_drops_bare_headings_only() {
        let input = "Chapter 1\nThe beginning\n  CHAPTER II.\nChapter Two\nchapter";
        assert_eq!(
            remove_chapter_headings(input),
            "The beginning\n  CHAPTER II.\nChapter Two"
        );
    }
}
