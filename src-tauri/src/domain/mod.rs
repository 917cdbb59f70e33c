//! Usage: Domain logic behind the shell document's commands (pure, no Tauri types).

pub(crate) mod toc;
