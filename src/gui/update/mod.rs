//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Thedal};

mod catalog;
mod charts;
mod filters;
mod playback;
mod util;

pub(crate) fn update(state: &mut Thedal, message: Message) -> Task<Message> {
    match message {
        // Filters
        Message::Filter(command) => filters::apply(state, command),
        Message::SetFacetTab(dimension) => filters::set_facet_tab(state, dimension),

        // Chart-local
        Message::SetChartTab(tab) => charts::set_tab(state, tab),
        Message::FocusSunburst(path) => charts::focus_sunburst(state, path),
        Message::BrushYear(year) => charts::brush_year(state, year),
        Message::ClearBrush => charts::clear_brush(state),
        Message::Highlight(key) => charts::highlight(state, key),

        // Playback
        Message::TickPlayback => playback::drain_events(state),
        Message::PlayIndex(i) => playback::play_index(state, i),
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Next => playback::next(state),
        Message::Prev => playback::prev(state),
        Message::ToggleShuffle => playback::toggle_shuffle(state),
        Message::Retry => playback::play_current(state),
        Message::SetVolume(vol) => playback::set_volume(state, vol),

        // Catalog
        Message::ImportInputChanged(s) => catalog::import_input_changed(state, s),
        Message::ImportPressed => catalog::import_pressed(state),
        Message::ImportFinished(result) => catalog::import_finished(state, result),
        Message::UseBuiltinCatalog => catalog::use_builtin(state),
    }
}
