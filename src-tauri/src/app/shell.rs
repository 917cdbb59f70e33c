//! Usage: Process-lifetime shell controller (ready / activate / all-windows-closed hooks).
//!
//! The controller owns the lifecycle state machine:
//! - `NoWindow --ready/activate--> WindowOpen`
//! - `WindowOpen --last window destroyed--> NoWindow`
//!
//! Window construction goes through [`WindowHost`], so the state machine runs the same way
//! against the Tauri runtime and against the in-memory host used by tests.

use super::window::{window_label, WindowConfig};
use crate::shared::mutex_ext::MutexExt;
use std::collections::BTreeSet;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ShellState {
    NoWindow,
    WindowOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitDecision {
    Exit,
    StayResident,
}

pub(crate) trait WindowHost {
    fn open_window_count(&self) -> usize;
    fn create_window(&self, label: &str, config: &WindowConfig) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub(crate) struct ShellConfig {
    pub(crate) window: WindowConfig,
    /// Keep the process alive after the last window closes (macOS convention).
    pub(crate) resident_without_windows: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            resident_without_windows: cfg!(target_os = "macos"),
        }
    }
}

#[derive(Default)]
struct Lifecycle {
    ready: bool,
    creating: bool,
    next_seq: u32,
    open: BTreeSet<String>,
}

impl Lifecycle {
    fn state(&self) -> ShellState {
        if self.open.is_empty() {
            ShellState::NoWindow
        } else {
            ShellState::WindowOpen
        }
    }
}

pub(crate) struct ShellController {
    config: ShellConfig,
    lifecycle: Mutex<Lifecycle>,
}

impl ShellController {
    pub(crate) fn new(config: ShellConfig) -> Self {
        Self {
            config,
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }

    pub(crate) fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub(crate) fn state(&self) -> ShellState {
        self.lifecycle.lock_or_recover().state()
    }

    pub(crate) fn on_ready(&self, host: &impl WindowHost) -> Result<(), String> {
        let label = {
            let mut lifecycle = self.lifecycle.lock_or_recover();
            if lifecycle.ready {
                tracing::warn!("ready signalled more than once; ignoring");
                return Ok(());
            }
            lifecycle.ready = true;
            begin_create(&mut lifecycle)
        };

        tracing::info!(
            resident_without_windows = self.config.resident_without_windows,
            "shell ready"
        );
        self.finish_create(host, label)
    }

    /// Returns `true` when a window was created.
    pub(crate) fn on_activate(&self, host: &impl WindowHost) -> Result<bool, String> {
        let label = {
            let mut lifecycle = self.lifecycle.lock_or_recover();
            if !lifecycle.ready {
                tracing::debug!("activate ignored: ready will create the first window");
                return Ok(false);
            }
            if lifecycle.creating {
                tracing::debug!("activate ignored: window creation already in progress");
                return Ok(false);
            }
            let open = host.open_window_count();
            if open > 0 {
                tracing::debug!(open, "activate ignored: windows already open");
                return Ok(false);
            }
            begin_create(&mut lifecycle)
        };

        tracing::info!("activate with no open windows");
        self.finish_create(host, label)?;
        Ok(true)
    }

    pub(crate) fn on_window_destroyed(&self, label: &str) -> ShellState {
        let mut lifecycle = self.lifecycle.lock_or_recover();
        if !lifecycle.open.remove(label) {
            tracing::debug!(label = %label, "destroyed window was not created by the shell");
        }
        let state = lifecycle.state();
        tracing::debug!(label = %label, state = ?state, "window destroyed");
        state
    }

    pub(crate) fn on_all_windows_closed(&self) -> ExitDecision {
        if self.config.resident_without_windows {
            tracing::info!("all windows closed; staying resident");
            return ExitDecision::StayResident;
        }
        tracing::info!("all windows closed; exiting");
        ExitDecision::Exit
    }

    fn finish_create(&self, host: &impl WindowHost, label: String) -> Result<(), String> {
        // The lock is released while the host builds the window.
        let result = host.create_window(&label, &self.config.window);

        let mut lifecycle = self.lifecycle.lock_or_recover();
        lifecycle.creating = false;
        match result {
            Ok(()) => {
                lifecycle.open.insert(label.clone());
                tracing::info!(
                    label = %label,
                    width = self.config.window.width,
                    height = self.config.window.height,
                    document = %self.config.window.document,
                    "window created"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(label = %label, "window creation failed: {}", err);
                Err(err)
            }
        }
    }
}

fn begin_create(lifecycle: &mut Lifecycle) -> String {
    lifecycle.creating = true;
    let label = window_label(lifecycle.next_seq);
    lifecycle.next_seq += 1;
    label
}
