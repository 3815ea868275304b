mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::app::App;

fn main() {
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Feira Estoque"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "feira", "estoque")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub(crate) fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("estoque.sqlite"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
