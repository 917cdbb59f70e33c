//! Usage: Tauri-managed state used by `commands/*`.

use crate::toc::LineEditor;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct TocEditorState(pub(crate) Mutex<LineEditor>);
