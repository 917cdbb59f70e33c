//! Usage: Table-of-contents text processing (cleanup, casing, line joining with undo).

mod case;
mod clean;
mod lines;

pub(crate) use case::{sentence_case, title_case};
pub(crate) use clean::{clean_text, process_text, remove_chapter_headings};
pub(crate) use lines::{LineEditor, LineEditorView, Separator};
