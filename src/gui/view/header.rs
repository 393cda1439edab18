//! Title, search box, reset, catalog source.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Length};

use thedal::core::FilterCommand;

use super::super::state::{Message, Thedal};
use super::constants::{SMALL_TEXT, TITLE, TITLE_TEXT};

pub(crate) fn search_row(state: &Thedal) -> iced::widget::Row<'_, Message> {
    let search = text_input(
        "Search songs, movies, artists (comma or space separated)",
        &state.filters.criteria().search,
    )
    .on_input(|s| Message::Filter(FilterCommand::SetSearch(s)))
    .width(Length::Fill);

    let reset = button("Reset").on_press(Message::Filter(FilterCommand::ResetAll));

    row![search, reset].spacing(8).align_y(Alignment::Center)
}

pub(crate) fn catalog_row(state: &Thedal) -> iced::widget::Row<'_, Message> {
    let input = text_input("Catalog .toml or MP3 folder", &state.import_input)
        .on_input(Message::ImportInputChanged)
        .on_submit(Message::ImportPressed)
        .width(Length::Fill);

    let load_btn = if state.importing {
        button("Loading...")
    } else {
        button("Load").on_press(Message::ImportPressed)
    };

    let builtin_btn = if state.importing {
        button("Built-in")
    } else {
        button("Built-in").on_press(Message::UseBuiltinCatalog)
    };

    row![input, load_btn, builtin_btn]
        .spacing(8)
        .align_y(Alignment::Center)
}

pub(crate) fn build_header(state: &Thedal) -> iced::widget::Container<'_, Message> {
    let shown = state.snapshot().filtered.len();

    let title_row = row![
        text(TITLE).size(TITLE_TEXT),
        text(format!("{shown} / {} songs", state.catalog.len())).size(SMALL_TEXT),
        text(&state.status).size(SMALL_TEXT),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(
        column![title_row, search_row(state), catalog_row(state)].spacing(8),
    )
    .padding(12)
}
