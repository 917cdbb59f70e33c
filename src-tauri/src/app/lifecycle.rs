//! Usage: Maps Tauri run events onto the shell controller hooks.

use super::shell::{ExitDecision, ShellController};
use super::window::TauriHost;
use tauri::{AppHandle, Manager, RunEvent, WindowEvent};

pub(crate) fn on_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        RunEvent::WindowEvent {
            label,
            event: WindowEvent::Destroyed,
            ..
        } => {
            app.state::<ShellController>().on_window_destroyed(&label);
        }
        // `code` is `None` only when the runtime asks to exit because the last window closed;
        // explicit exits (`shell_quit`, tray, signals) carry a code and are never held back.
        RunEvent::ExitRequested { api, code, .. } => {
            let decision = match code {
                Some(code) => {
                    tracing::info!(code, "exit requested");
                    ExitDecision::Exit
                }
                None => app.state::<ShellController>().on_all_windows_closed(),
            };
            if hold_exit(code, decision) {
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => activate(app),
        RunEvent::Exit => tracing::info!("shell exiting"),
        _ => {}
    }
}

fn hold_exit(code: Option<i32>, decision: ExitDecision) -> bool {
    code.is_none() && decision == ExitDecision::StayResident
}

/// Activation from a dock click (macOS) or a second launch forwarded by single-instance.
pub(crate) fn activate(app: &AppHandle) {
    let shell = app.state::<ShellController>();
    match shell.on_activate(&TauriHost::new(app)) {
        Ok(true) => {}
        Ok(false) => tracing::debug!("activate: no window created"),
        Err(err) => tracing::error!("activate failed: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_window_exit_is_held_only_when_staying_resident() {
        assert!(hold_exit(None, ExitDecision::StayResident));
        assert!(!hold_exit(None, ExitDecision::Exit));
    }

    #[test]
    fn explicit_exit_is_never_held() {
        assert!(!hold_exit(Some(0), ExitDecision::StayResident));
        assert!(!hold_exit(Some(0), ExitDecision::Exit));
        assert!(!hold_exit(Some(1), ExitDecision::StayResident));
    }
}
