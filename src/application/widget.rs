#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Event;
use crate::domain::services::html;
use crate::domain::services::html::RenderOptions;
use crate::domain::services::AppState;
use crate::domain::services::Translations;

/// Stages the fragment next to its final path and renames it into place so
/// dashboard file watchers never read a half written table.
async fn write_fragment(path: &str, fragment: &str) -> Result<()> {
    if path == "-" {
        println!("{fragment}");
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let staging_path = format!("{path}.tmp");
    fs::write(&staging_path, fragment).await?;
    fs::rename(&staging_path, path).await?;

    return Ok(());
}

pub async fn write_credentials_notice() -> Result<()> {
    let translations = Translations::load(&Config::get(ConfigKey::Language))?;
    let fragment = html::credentials_missing(&translations);
    return write_fragment(&Config::get(ConfigKey::OutputFile), &fragment).await;
}

/// Consumes poller events and keeps the fragment on disk in sync with the
/// latest known probe list. Writes the loading notice up front so the
/// dashboard shows something before the first poll lands.
pub async fn start(mut rx: mpsc::UnboundedReceiver<Event>) -> Result<()> {
    let translations = Translations::load(&Config::get(ConfigKey::Language))?;
    let options = RenderOptions::from_config();
    let output_file = Config::get(ConfigKey::OutputFile);

    let mut app_state = AppState::default();
    write_fragment(&output_file, &app_state.render(&options, &translations)).await?;

    loop {
        let event = rx.recv().await;
        if event.is_none() {
            bail!("event channel closed");
        }

        app_state.handle_event(event.unwrap());
        write_fragment(&output_file, &app_state.render(&options, &translations)).await?;
    }
}
