//! Compact (phone-sized) layout: one scrolling column, same snapshot.

use iced::Length;
use iced::widget::{Column, column, container, row, scrollable, text};

use super::super::state::{Message, Thedal};
use super::charts::{chart_tabs, panel};
use super::constants::{COMPACT_LIST_H, SMALL_TEXT, TITLE, TITLE_TEXT};
use super::facets::build_facets;
use super::header::search_row;
use super::playlist::song_list;
use super::widgets::{player_bar, section};

/// Songs rendered before "… and N more" in the compact list.
const COMPACT_SONGS: usize = 50;

pub(crate) fn view(state: &Thedal) -> Column<'_, Message> {
    let shown = state.snapshot().filtered.len();

    let head = column![
        row![
            text(TITLE).size(TITLE_TEXT),
            text(format!("{shown} / {}", state.catalog.len())).size(SMALL_TEXT),
        ]
        .spacing(10),
        text(&state.status).size(SMALL_TEXT),
        search_row(state),
    ]
    .spacing(6);

    let songs = column![
        section(format!("Songs ({})", state.playlist.len())),
        scrollable(song_list(state, Some(COMPACT_SONGS))).height(Length::Fixed(COMPACT_LIST_H)),
    ]
    .spacing(6);

    let body = column![
        player_bar(state),
        songs,
        build_facets(state).height(Length::Fixed(COMPACT_LIST_H)),
        chart_tabs(state),
        container(panel(state)),
    ]
    .spacing(12);

    column![head, scrollable(body).height(Length::Fill)]
        .spacing(10)
        .padding(10)
}
