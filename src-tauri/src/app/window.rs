//! Usage: Fixed window configuration and the Tauri-backed window factory used by the shell controller.

use super::shell::WindowHost;
use std::path::PathBuf;
use tauri::path::BaseDirectory;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const WINDOW_TITLE: &str = "Desktop Shell";
pub(crate) const WINDOW_WIDTH: f64 = 1200.0;
pub(crate) const WINDOW_HEIGHT: f64 = 800.0;
/// Resolved against the bundled resource directory.
pub(crate) const WINDOW_ICON_PATH: &str = "build/icon.ico";
/// Resolved against the bundled frontend assets.
pub(crate) const DOCUMENT_PATH: &str = "index.html";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: &'static str,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) icon_path: &'static str,
    pub(crate) document: &'static str,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            icon_path: WINDOW_ICON_PATH,
            document: DOCUMENT_PATH,
        }
    }
}

/// Labels must be unique per live window: `main`, then `main-2`, `main-3`, ...
pub(crate) fn window_label(seq: u32) -> String {
    if seq == 0 {
        return MAIN_WINDOW_LABEL.to_string();
    }
    format!("{MAIN_WINDOW_LABEL}-{}", seq + 1)
}

pub(crate) struct TauriHost<'a> {
    app: &'a tauri::AppHandle,
}

impl<'a> TauriHost<'a> {
    pub(crate) fn new(app: &'a tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl WindowHost for TauriHost<'_> {
    fn open_window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn create_window(&self, label: &str, config: &WindowConfig) -> Result<(), String> {
        let url = WebviewUrl::App(PathBuf::from(config.document));
        let builder = WebviewWindowBuilder::new(self.app, label, url)
            .title(config.title)
            .inner_size(config.width, config.height);

        // A bad icon never blocks the window; the platform default icon is used instead.
        let builder = match load_icon(self.app, config.icon_path) {
            Ok(icon) => builder
                .icon(icon)
                .map_err(|e| format!("failed to set window icon: {e}"))?,
            Err(err) => {
                tracing::warn!(label = %label, "window icon unavailable: {}", err);
                builder
            }
        };

        builder
            .build()
            .map_err(|e| format!("failed to build window {label}: {e}"))?;
        Ok(())
    }
}

fn load_icon(
    app: &tauri::AppHandle,
    relative_path: &str,
) -> Result<tauri::image::Image<'static>, String> {
    let path = app
        .path()
        .resolve(relative_path, BaseDirectory::Resource)
        .map_err(|e| format!("failed to resolve icon path {relative_path}: {e}"))?;

    tauri::image::Image::from_path(&path)
        .map_err(|e| format!("failed to load icon {}: {e}", path.display()))
}
