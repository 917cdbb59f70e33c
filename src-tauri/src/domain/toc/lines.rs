//! Usage: Line editor for joining a cleaned table of contents into one entry string.
//!
//! Each line after the first can be joined to the previous one with a separator:
//! - `Author` (` / `): the line is an author credit and is title-cased.
//! - `Title` (` -- `): the line starts the next title.
//!
//! Removals and separator changes are undoable.

use super::case::title_case;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static REPEATED_TITLE_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s*--\s*)+").expect("Invalid REPEATED_TITLE_SEPARATOR_REGEX pattern")
});
static REPEATED_AUTHOR_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s*/\s*)+").expect("Invalid REPEATED_AUTHOR_SEPARATOR_REGEX pattern")
});
static MIXED_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*--\s*/\s*|\s*/\s*--\s*").expect("Invalid MIXED_SEPARATOR_REGEX pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Separator {
    #[default]
    None,
    Author,
    Title,
}

impl Separator {
    fn as_str(self) -> &'static str {
        match self {
            Separator::None => " ",
            Separator::Author => " / ",
            Separator::Title => " -- ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TocLine {
    pub(crate) text: String,
    pub(crate) separator: Separator,
}

#[derive(Debug, Clone)]
enum Edit {
    Removed { index: usize, line: TocLine },
    Changed { index: usize, previous: TocLine },
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LineEditorView {
    pub(crate) lines: Vec<TocLine>,
    pub(crate) preview: String,
    pub(crate) can_undo: bool,
}

#[derive(Debug, Default)]
pub(crate) struct LineEditor {
    lines: Vec<TocLine>,
    undo: Vec<Edit>,
}

impl LineEditor {
    /// Blank lines are skipped; surrounding whitespace is trimmed.
    pub(crate) fn load(&mut self, text: &str) {
        self.lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| TocLine {
                text: line.to_string(),
                separator: Separator::None,
            })
            .collect();
        self.undo.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), String> {
        if index >= self.lines.len() {
            return Err(format!(
                "line index {index} out of range (lines: {})",
                self.lines.len()
            ));
        }
        Ok(())
    }

    pub(crate) fn set_separator(&mut self, index: usize, separator: Separator) -> Result<(), String> {
        self.check_index(index)?;
        if index == 0 {
            return Err("the first line cannot take a separator".to_string());
        }

        let previous = self.lines[index].clone();
        let line = &mut self.lines[index];
        line.separator = separator;
        if separator == Separator::Author {
            line.text = title_case(&line.text);
        }
        if *line != previous {
            self.undo.push(Edit::Changed { index, previous });
        }
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<(), String> {
        self.check_index(index)?;
        let line = self.lines.remove(index);
        self.undo.push(Edit::Removed { index, line });
        Ok(())
    }

    /// Returns `false` when there is nothing to undo.
    pub(crate) fn undo(&mut self) -> bool {
        let Some(edit) = self.undo.pop() else {
            return false;
        };
        match edit {
            Edit::Removed { index, line } => self.lines.insert(index, line),
            Edit::Changed { index, previous } => self.lines[index] = previous,
        }
        true
    }

    /// Lines joined with their separators; lines without one are joined by a space.
    pub(crate) fn preview(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push_str(line.separator.as_str());
            }
            out.push_str(&line.text);
        }
        out
    }

    /// The finished entry: separators normalized and a closing period added.
    pub(crate) fn finish(&self) -> String {
        let mut text = normalize_separators(&self.preview());
        if !text.is_empty() && !text.trim_end().ends_with('.') {
            text.push('.');
        }
        text
    }

    pub(crate) fn view(&self) -> LineEditorView {
        LineEditorView {
            lines: self.lines.clone(),
            preview: self.preview(),
            can_undo: !self.undo.is_empty(),
        }
    }
}

/// Collapses repeated separators; an author separator wins over an adjacent title one.
pub(crate) fn normalize_separators(text: &str) -> String {
    let text = REPEATED_TITLE_SEPARATOR_REGEX.replace_all(text, " -- ");
    let text = REPEATED_AUTHOR_SEPARATOR_REGEX.replace_all(&text, " / ");
    MIXED_SEPARATOR_REGEX.replace_all(&text, " / ").into_owned()
}
