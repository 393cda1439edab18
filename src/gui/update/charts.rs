//! gui/update/charts.rs
//! Chart-local state: tab, sunburst zoom, timeline brush, highlighted record.
//!
//! Only tab switching survives a reset; the rest lives in `state.chart` and
//! goes back to default when the reset generation moves.

use iced::Task;

use thedal::core::aggregate::CollaborationKey;

use super::super::state::{ChartTab, Message, Thedal};

pub(crate) fn set_tab(state: &mut Thedal, tab: ChartTab) -> Task<Message> {
    state.chart_tab = tab;
    Task::none()
}

pub(crate) fn focus_sunburst(state: &mut Thedal, path: Vec<String>) -> Task<Message> {
    let generation = state.filters.generation();
    state.chart.get_mut(generation).focus = path;
    Task::none()
}

/// First click anchors the brush on one year; the second extends it into a
/// range. A third click starts over.
pub(crate) fn brush_year(state: &mut Thedal, year: i32) -> Task<Message> {
    let generation = state.filters.generation();
    let chart = state.chart.get_mut(generation);

    chart.brush = match chart.brush {
        Some((a, b)) if a == b => Some((a.min(year), a.max(year))),
        _ => Some((year, year)),
    };

    Task::none()
}

pub(crate) fn clear_brush(state: &mut Thedal) -> Task<Message> {
    let generation = state.filters.generation();
    state.chart.get_mut(generation).brush = None;
    Task::none()
}

pub(crate) fn highlight(state: &mut Thedal, key: Option<CollaborationKey>) -> Task<Message> {
    let generation = state.filters.generation();
    let chart = state.chart.get_mut(generation);

    // Clicking the highlighted record again clears it.
    chart.highlighted = match key {
        Some(k) if chart.highlighted.as_ref() == Some(&k) => None,
        other => other,
    };

    Task::none()
}
