//! Playlist panel (filtered songs in play order).

use iced::widget::{Column, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use thedal::core::PlaybackStatus;

use super::super::state::{Message, Thedal};
use super::constants::{LIST_SPACING, ROW_H, ROW_HPAD, ROW_TEXT, ROW_VPAD, SMALL_TEXT};
use super::widgets::section;

pub(crate) fn song_list(state: &Thedal, limit: Option<usize>) -> Column<'_, Message> {
    let current = state.playlist.current_index();
    let playing = matches!(
        state.playlist.status(),
        PlaybackStatus::Playing | PlaybackStatus::Loading
    );

    let mut col = column![].spacing(LIST_SPACING);
    let shown = limit.unwrap_or(usize::MAX);

    for (i, s) in state.playlist.songs().iter().enumerate().take(shown) {
        let marker = match (current == Some(i), playing) {
            (true, true) => "▶",
            (true, false) => "•",
            _ => "",
        };

        let cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(16.0)),
            column![
                text(s.song.clone()).size(ROW_TEXT),
                text(format!("{} · {} · {}", s.movie, s.year, s.singer)).size(SMALL_TEXT),
            ]
            .width(Length::Fill),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        col = col.push(
            mouse_area(
                container(cells)
                    .padding([ROW_VPAD, ROW_HPAD])
                    .height(Length::Fixed(ROW_H * 1.6))
                    .width(Length::Fill),
            )
            .on_press(Message::PlayIndex(i)),
        );
    }

    let hidden = state.playlist.len().saturating_sub(shown);
    if hidden > 0 {
        col = col.push(text(format!("… and {hidden} more")).size(SMALL_TEXT));
    }
    col
}

pub(crate) fn build_playlist(state: &Thedal) -> iced::widget::Container<'_, Message> {
    let title = if state.playlist.is_shuffled() {
        format!("Playlist ({}, shuffled)", state.playlist.len())
    } else {
        format!("Playlist ({})", state.playlist.len())
    };

    let body: iced::Element<'_, Message> = if state.playlist.is_empty() {
        text("No songs match the current filters.")
            .size(SMALL_TEXT)
            .into()
    } else {
        scrollable(song_list(state, None)).height(Length::Fill).into()
    };

    container(column![section(title), body].spacing(10)).padding(12)
}
