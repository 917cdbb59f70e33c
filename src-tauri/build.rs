const APP_COMMANDS: &[&str] = &[
    "shell_info",
    "shell_quit",
    "toc_clean_text",
    "toc_process_text",
    "toc_remove_chapters",
    "toc_sentence_case",
    "toc_title_case",
    "toc_lines_load",
    "toc_lines_view",
    "toc_line_set_separator",
    "toc_line_remove",
    "toc_undo",
    "toc_finish",
];

fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(APP_COMMANDS)),
    )
    .expect("failed to run tauri-build");
}
