//! Usage: Table-of-contents text commands (cleanup passes, casing, line editor with undo).

use crate::app_state::TocEditorState;
use crate::shared::mutex_ext::MutexExt;
use crate::toc::{self, LineEditorView, Separator};

#[tauri::command]
pub(crate) fn toc_clean_text(text: String) -> String {
    toc::clean_text(&text)
}

#[tauri::command]
pub(crate) fn toc_process_text(text: String) -> String {
    toc::process_text(&text).join("\n")
}

#[tauri::command]
pub(crate) fn toc_remove_chapters(text: String) -> String {
    toc::remove_chapter_headings(&text)
}

#[tauri::command]
pub(crate) fn toc_sentence_case(text: String) -> String {
    text.lines()
        .map(toc::sentence_case)
        .collect::<Vec<_>>()
        .join("\n")
}

#[tauri::command]
pub(crate) fn toc_title_case(text: String) -> String {
    text.lines().map(toc::title_case).collect::<Vec<_>>().join("\n")
}

#[tauri::command]
pub(crate) fn toc_lines_load(
    state: tauri::State<'_, TocEditorState>,
    text: String,
) -> LineEditorView {
    let mut editor = state.0.lock_or_recover();
    editor.load(&text);
    tracing::debug!(lines = editor.view().lines.len(), "toc lines loaded");
    editor.view()
}

#[tauri::command]
pub(crate) fn toc_lines_view(state: tauri::State<'_, TocEditorState>) -> LineEditorView {
    state.0.lock_or_recover().view()
}

#[tauri::command]
pub(crate) fn toc_line_set_separator(
    state: tauri::State<'_, TocEditorState>,
    index: usize,
    separator: Separator,
) -> Result<LineEditorView, String> {
    let mut editor = state.0.lock_or_recover();
    editor.set_separator(index, separator)?;
    Ok(editor.view())
}

#[tauri::command]
pub(crate) fn toc_line_remove(
    state: tauri::State<'_, TocEditorState>,
    index: usize,
) -> Result<LineEditorView, String> {
    let mut editor = state.0.lock_or_recover();
    editor.remove(index)?;
    Ok(editor.view())
}

#[tauri::command]
pub(crate) fn toc_undo(state: tauri::State<'_, TocEditorState>) -> LineEditorView {
    let mut editor = state.0.lock_or_recover();
    if !editor.undo() {
        tracing::debug!("toc undo: nothing to undo");
    }
    editor.view()
}

#[tauri::command]
pub(crate) fn toc_finish(state: tauri::State<'_, TocEditorState>) -> String {
    state.0.lock_or_recover().finish()
}
