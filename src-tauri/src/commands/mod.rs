//! Usage: Tauri commands exposed to the shell document (the only host channel it can reach).

mod app;
mod toc;

pub(crate) use app::*;
pub(crate) use toc::*;
