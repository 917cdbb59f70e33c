//! Usage: App-level Tauri commands (shell info, quit).

use crate::shell::{ShellController, ShellState};
use std::time::Duration;

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct ShellInfo {
    os: String,
    arch: String,
    profile: String,
    app_version: String,
    window_width: f64,
    window_height: f64,
    document: String,
    resident_without_windows: bool,
    state: ShellState,
}

fn build_shell_info(shell: &ShellController) -> ShellInfo {
    let config = shell.config();
    ShellInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        window_width: config.window.width,
        window_height: config.window.height,
        document: config.window.document.to_string(),
        resident_without_windows: config.resident_without_windows,
        state: shell.state(),
    }
}

#[tauri::command]
pub(crate) fn shell_info(shell: tauri::State<'_, ShellController>) -> ShellInfo {
    build_shell_info(shell.inner())
}

/// Lets the invoke reply reach the document before the runtime tears the window down.
const QUIT_DELAY: Duration = Duration::from_millis(200);

/// Explicit quit; also the way out on platforms that stay resident without windows.
///
/// The exit carries code 0, so the run loop never holds it back.
#[tauri::command]
pub(crate) fn shell_quit(app: tauri::AppHandle) {
    tracing::info!(delay_ms = QUIT_DELAY.as_millis() as u64, "quit requested from document");
    std::thread::spawn(move || {
        std::thread::sleep(QUIT_DELAY);
        app.exit(0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellConfig;

    #[test]
    fn shell_info_reports_fixed_window_and_state() {
        let shell = ShellController::new(ShellConfig {
            resident_without_windows: true,
            ..ShellConfig::default()
        });

        let info = build_shell_info(&shell);
        assert_eq!(info.window_width, 1200.0);
        assert_eq!(info.window_height, 800.0);
        assert_eq!(info.document, "index.html");
        assert!(info.resident_without_windows);
        assert_eq!(info.state, ShellState::NoWindow);
        assert_eq!(info.app_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn shell_info_serializes_state_in_snake_case() {
        let shell = ShellController::new(ShellConfig::default());
        let value = serde_json::to_value(build_shell_info(&shell)).expect("serialize");
        assert_eq!(value["state"], "no_window");
        assert_eq!(value["document"], "index.html");
        assert_eq!(value["window_width"], 1200.0);
    }

    #[test]
    fn quit_delay_is_short_but_lets_the_reply_through() {
        assert!(QUIT_DELAY >= Duration::from_millis(100));
        assert!(QUIT_DELAY < Duration::from_secs(1));
    }
}
