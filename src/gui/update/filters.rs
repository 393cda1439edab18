//! gui/update/filters.rs
//! Facet buttons, drill chips, search box and reset all land here as
//! `FilterCommand`s. After every effective change the snapshot and playlist
//! are refreshed in one go.

use iced::Task;
use tracing::debug;

use thedal::core::{Dimension, FilterCommand};

use super::super::state::{Message, Thedal};
use super::playback::stop_if_current_changed;

pub(crate) fn apply(state: &mut Thedal, command: FilterCommand) -> Task<Message> {
    let reset = command == FilterCommand::ResetAll;

    let changed = state.filters.apply(command);

    if reset {
        // Chart-local cells catch up with the new generation.
        state.chart.sync(state.filters.generation());
    }

    if !changed {
        return Task::none();
    }

    let current_changed = state.refresh();
    stop_if_current_changed(state, current_changed);

    let shown = state.snapshot().filtered.len();
    debug!(
        revision = state.filters.revision(),
        shown,
        "filters applied"
    );
    state.status = format!("{shown} of {} songs", state.catalog.len());

    Task::none()
}

pub(crate) fn set_facet_tab(state: &mut Thedal, dimension: Dimension) -> Task<Message> {
    state.facet_tab = dimension;
    Task::none()
}
