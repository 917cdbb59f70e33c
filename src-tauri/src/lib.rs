mod app;
mod commands;
mod domain;
mod shared;

pub(crate) use app::{app_state, lifecycle, logging, shell, window};
pub(crate) use domain::toc;

use app_state::TocEditorState;

use commands::*;
use shell::{ShellConfig, ShellController};
use tauri::Manager;
use window::TauriHost;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    // Must be the first plugin so a second launch is forwarded before anything else starts.
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, argv, _cwd| {
        tracing::debug!(?argv, "second instance forwarded as activate");
        lifecycle::activate(app);
    }));

    let app = builder
        .manage(ShellController::new(ShellConfig::default()))
        .manage(TocEditorState::default())
        .setup(|app| {
            logging::init(app.handle());

            let shell = app.state::<ShellController>();
            shell.on_ready(&TauriHost::new(app.handle()))?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            shell_info,
            shell_quit,
            toc_clean_text,
            toc_process_text,
            toc_remove_chapters,
            toc_sentence_case,
            toc_title_case,
            toc_lines_load,
            toc_lines_view,
            toc_line_set_separator,
            toc_line_remove,
            toc_undo,
            toc_finish
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(lifecycle::on_run_event);
}
