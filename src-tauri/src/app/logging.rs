//! Usage: Process-wide tracing setup (stdout + daily rolling file under the app log dir).
//!
//! - `RUST_LOG` overrides the default filter.
//! - `log` records emitted by the runtime are bridged through `tracing-log`.
//! - When the log dir cannot be prepared, only stdout logging is installed.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tauri::Manager;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "shell.log";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "desktop_shell_lib=debug,info"
    } else {
        "desktop_shell_lib=info,warn"
    }
}

fn prepare_log_dir(dir: &Path) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create log dir {}: {e}", dir.display()))?;
    Ok(dir.to_path_buf())
}

/// `None` once a file writer exists; its guard is held for the process lifetime and a second
/// writer would lose its output when its guard dropped.
fn file_writer(dir: &Path) -> Option<NonBlocking> {
    if FILE_GUARD.get().is_some() {
        return None;
    }
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    FILE_GUARD.set(guard).ok()?;
    Some(writer)
}

pub(crate) fn init(app: &tauri::AppHandle) {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| format!("failed to resolve app log dir: {e}"))
        .and_then(|dir| prepare_log_dir(&dir));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    let file_layer = log_dir
        .as_ref()
        .ok()
        .and_then(|dir| file_writer(dir))
        .map(|writer| {
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
        });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already installed (e.g. a second setup in the same process).
        return;
    }
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {}", err);
    }

    match log_dir {
        Ok(dir) => tracing::info!(dir = %dir.display(), "logging initialized"),
        Err(err) => tracing::warn!("file logging disabled: {}", err),
    }
}

#[cfg(test)]
pub(crate) fn init_test() {
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_tmp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "desktop_shell_logging_test_{nanos}_{}",
            std::process::id()
        ))
    }

    #[test]
    fn prepare_log_dir_creates_nested_dirs() {
        let root = unique_tmp_dir();
        let dir = root.join("logs").join("nested");
        let out = prepare_log_dir(&dir).expect("prepare_log_dir");
        assert_eq!(out, dir);
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn prepare_log_dir_fails_when_path_is_a_file() {
        let root = unique_tmp_dir();
        std::fs::create_dir_all(&root).expect("create root");
        let file = root.join("not-a-dir");
        std::fs::write(&file, "x").expect("write file");

        let err = prepare_log_dir(&file.join("logs")).expect_err("should fail");
        assert!(err.starts_with("failed to create log dir"), "{err}");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn file_writer_is_created_once_per_process() {
        let dir = unique_tmp_dir();
        std::fs::create_dir_all(&dir).expect("create dir");

        assert!(file_writer(&dir).is_some());
        assert!(file_writer(&dir).is_none());
        assert!(FILE_GUARD.get().is_some());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_filter().starts_with("desktop_shell_lib="));
    }

    #[test]
    fn init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("still logging");
    }
}
