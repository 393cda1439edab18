//! Facet sidebar: one tab per dimension, multi-select buttons, active drills.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use thedal::core::{Dimension, FilterCommand};

use super::super::state::{Message, Thedal};
use super::constants::{ROW_TEXT, SMALL_TEXT};
use super::widgets::{section, toggle_button};

fn facet_tabs(state: &Thedal) -> Element<'_, Message> {
    let mut tabs = row![].spacing(4);
    for dim in Dimension::ALL {
        let label = format!("{} ({})", dim.plural(), state.filters.criteria().facet_len(dim));
        tabs = tabs.push(toggle_button(
            &label,
            state.facet_tab == dim,
            Message::SetFacetTab(dim),
        ));
    }
    tabs.wrap().into()
}

fn facet_values(state: &Thedal) -> Column<'_, Message> {
    let dim = state.facet_tab;
    let criteria = state.filters.criteria();

    let mut list = column![].spacing(4);
    for value in state.catalog.facet_values(dim) {
        let selected = criteria.is_selected(&value);
        let label = value.to_string();
        list = list.push(toggle_button(
            &label,
            selected,
            Message::Filter(FilterCommand::ToggleFacet(value)),
        ));
    }
    list
}

/// Chips for the active chart drills; clicking one clears it.
pub(crate) fn drill_chips(state: &Thedal) -> Element<'_, Message> {
    let criteria = state.filters.criteria();

    let mut chips = row![].spacing(6);
    let mut any = false;
    for dim in Dimension::ALL {
        if let Some(value) = criteria.drill(dim) {
            any = true;
            chips = chips.push(
                button(text(format!("× {}: {value}", dim.label())).size(SMALL_TEXT))
                    .on_press(Message::Filter(FilterCommand::ClearDrill(dim))),
            );
        }
    }

    if any {
        column![text("Chart filters").size(SMALL_TEXT), chips.wrap()]
            .spacing(4)
            .into()
    } else {
        column![].into()
    }
}

pub(crate) fn build_facets(state: &Thedal) -> iced::widget::Container<'_, Message> {
    let dim = state.facet_tab;

    let clear = if state.filters.criteria().facet_len(dim) > 0 {
        button(text(format!("Clear {}", dim.plural())).size(ROW_TEXT))
            .on_press(Message::Filter(FilterCommand::ClearFacet(dim)))
    } else {
        button(text(format!("Clear {}", dim.plural())).size(ROW_TEXT))
    };

    let col = column![
        section("Filters"),
        facet_tabs(state),
        drill_chips(state),
        clear,
        scrollable(facet_values(state)).height(Length::Fill),
    ]
    .spacing(10);

    container(col).padding(12)
}
