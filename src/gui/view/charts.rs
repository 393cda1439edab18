//! Chart area: tab strip + one panel per tab.
//! Every bar is clickable and sends a drill `FilterCommand`.

use iced::widget::{Column, column, container, row, scrollable};
use iced::{Element, Length};

use thedal::core::aggregate::CountEntry;
use thedal::core::{Dimension, FilterCommand};

use super::super::state::{ChartTab, Message, Thedal};
use super::widgets::{bar_cells, bar_row, empty_note, section, toggle_button};
use super::{hierarchy, network, timeline};

pub(crate) fn chart_tabs(state: &Thedal) -> Element<'_, Message> {
    let mut tabs = row![].spacing(4);
    for tab in ChartTab::ALL {
        tabs = tabs.push(toggle_button(
            tab.label(),
            state.chart_tab == tab,
            Message::SetChartTab(tab),
        ));
    }
    tabs.wrap().into()
}

/// Ranked counts for one dimension; click drills into that value.
pub(crate) fn count_table<'a>(
    state: &'a Thedal,
    title: &str,
    entries: &[CountEntry],
) -> Column<'a, Message> {
    let criteria = state.filters.criteria();
    let cells = bar_cells(state);
    let max = entries.first().map(|e| e.count).unwrap_or(0);

    let mut col = column![section(title)].spacing(2);
    if entries.is_empty() {
        return col.push(empty_note("songs"));
    }

    for e in entries {
        let dim = e.value.dimension();
        let marker = if criteria.drill(dim) == Some(&e.value) {
            "▶"
        } else {
            ""
        };
        col = col.push(bar_row(
            marker,
            e.value.to_string(),
            e.count,
            max,
            cells,
            Message::Filter(FilterCommand::ToggleDrill(e.value.clone())),
        ));
    }
    col
}

fn overview(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let top = state.limits.top_k;

    column![
        count_table(
            state,
            &format!("Top {top} {}", Dimension::Singer.plural()),
            snap.counts(Dimension::Singer)
        ),
        count_table(
            state,
            &format!("Top {top} {}", Dimension::Composer.plural()),
            snap.counts(Dimension::Composer)
        ),
        count_table(
            state,
            &format!("Top {top} {}", Dimension::Lyricist.plural()),
            snap.counts(Dimension::Lyricist)
        ),
    ]
    .spacing(16)
}

pub(crate) fn panel(state: &Thedal) -> Column<'_, Message> {
    match state.chart_tab {
        ChartTab::Overview => overview(state),
        ChartTab::Timeline => timeline::build_timeline(state),
        ChartTab::Collaborations => network::build_network(state),
        ChartTab::Hierarchy => hierarchy::build_hierarchy(state),
    }
}

pub(crate) fn build_charts(state: &Thedal) -> iced::widget::Container<'_, Message> {
    let col = column![
        chart_tabs(state),
        scrollable(panel(state).padding([0, 12])).height(Length::Fill),
    ]
    .spacing(12);

    container(col).padding(12)
}
