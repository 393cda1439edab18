//! gui/update/catalog.rs
//! Swap the catalog for the session: folder/TOML import off-thread, or back
//! to the built-in list.
//!
//! A new catalog invalidates every filter value, so filters reset with it.

use std::path::PathBuf;

use iced::Task;
use tracing::{error, info};

use thedal::core::{Catalog, FilterCommand, ImportReport};

use super::super::state::{Message, Thedal};
use super::playback::stop_if_current_changed;
use super::util::spawn_blocking;

pub(crate) fn import_input_changed(state: &mut Thedal, s: String) -> Task<Message> {
    state.import_input = s;
    Task::none()
}

pub(crate) fn import_pressed(state: &mut Thedal) -> Task<Message> {
    if state.importing {
        return Task::none();
    }

    let raw = state.import_input.trim();
    if raw.is_empty() {
        state.status = "Enter a folder or .toml catalog path.".into();
        return Task::none();
    }

    let path = PathBuf::from(raw);
    state.importing = true;
    state.status = format!("Loading {}...", path.display());

    Task::perform(
        async move {
            spawn_blocking(move || load_report(&path))
                .await
                .and_then(|r| r)
        },
        Message::ImportFinished,
    )
}

fn load_report(path: &std::path::Path) -> Result<ImportReport, String> {
    if path.is_dir() {
        Catalog::import_folder(path).map_err(|e| e.to_string())
    } else {
        let catalog = Catalog::from_toml_file(path).map_err(|e| e.to_string())?;
        Ok(ImportReport {
            files: 1,
            skipped: 0,
            catalog,
        })
    }
}

pub(crate) fn import_finished(
    state: &mut Thedal,
    result: Result<ImportReport, String>,
) -> Task<Message> {
    state.importing = false;

    match result {
        Ok(report) => {
            let songs = report.catalog.len();
            install(state, report.catalog);
            state.status = if report.skipped == 0 {
                format!("Loaded {songs} songs")
            } else {
                format!("Loaded {songs} songs ({} files skipped)", report.skipped)
            };
        }
        Err(e) => {
            // Keep the previous catalog; just report.
            error!(error = %e, "catalog import failed");
            state.status = format!("Import error: {e}");
        }
    }

    Task::none()
}

pub(crate) fn use_builtin(state: &mut Thedal) -> Task<Message> {
    match Catalog::builtin() {
        Ok(catalog) => {
            let songs = catalog.len();
            install(state, catalog);
            state.status = format!("Built-in catalog: {songs} songs");
        }
        Err(e) => {
            error!(error = %e, "built-in catalog invalid");
            state.status = format!("Built-in catalog error: {e}");
        }
    }
    Task::none()
}

fn install(state: &mut Thedal, catalog: Catalog) {
    info!(songs = catalog.len(), revision = catalog.revision(), "catalog installed");
    state.catalog = catalog;

    state.filters.apply(FilterCommand::ResetAll);
    state.chart.sync(state.filters.generation());

    let changed = state.refresh();
    stop_if_current_changed(state, changed);
}
