//! Reusable small widgets/helpers used across view modules.

use iced::widget::{button, column, container, mouse_area, row, slider, text};
use iced::{Alignment, Element, Length};

use thedal::config::Layout;
use thedal::core::PlaybackStatus;

use super::super::state::{Message, Thedal};
use super::constants::{
    BAR_CELLS, COMPACT_BAR_CELLS, COUNT_W, LABEL_W, ROW_H, ROW_HPAD, ROW_TEXT, ROW_VPAD,
    SECTION_TEXT, SMALL_TEXT,
};

pub(crate) fn fmt_ms(ms: u64) -> String {
    let s = ms / 1000;
    let m = s / 60;
    let s = s % 60;
    format!("{m}:{s:02}")
}

/// `value / max` as a run of block characters, at least one cell for non-zero.
pub(crate) fn bar(value: usize, max: usize, cells: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let n = (value * cells).div_ceil(max).clamp(1, cells);
    "█".repeat(n)
}

pub(crate) fn bar_cells(state: &Thedal) -> usize {
    match state.layout {
        Layout::Desktop => BAR_CELLS,
        Layout::Compact => COMPACT_BAR_CELLS,
    }
}

pub(crate) fn section(title: impl ToString) -> iced::widget::Text<'static> {
    text(title.to_string()).size(SECTION_TEXT)
}

/// One clickable row of a ranked chart: label, bar, count.
pub(crate) fn bar_row(
    marker: &str,
    label: String,
    value: usize,
    max: usize,
    cells: usize,
    on_press: Message,
) -> Element<'static, Message> {
    let cells_row = row![
        text(marker.to_string())
            .size(ROW_TEXT)
            .width(Length::Fixed(14.0)),
        text(label).size(ROW_TEXT).width(Length::Fixed(LABEL_W)),
        text(bar(value, max, cells))
            .size(ROW_TEXT)
            .width(Length::Fill),
        text(value.to_string())
            .size(ROW_TEXT)
            .width(Length::Fixed(COUNT_W)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    mouse_area(
        container(cells_row)
            .padding([ROW_VPAD, ROW_HPAD])
            .height(Length::Fixed(ROW_H))
            .width(Length::Fill),
    )
    .on_press(on_press)
    .into()
}

/// Toggle-style button: "✓ label" when active.
pub(crate) fn toggle_button(
    label: &str,
    active: bool,
    on_press: Message,
) -> iced::widget::Button<'static, Message> {
    let shown = if active {
        format!("✓ {label}")
    } else {
        label.to_string()
    };
    button(text(shown).size(ROW_TEXT)).on_press(on_press)
}

pub(crate) fn empty_note(what: &str) -> Element<'static, Message> {
    text(format!("No {what} for the current filters."))
        .size(SMALL_TEXT)
        .into()
}

/// Transport bar.
///
/// Emits only Messages (no rodio, no decoding).
pub(crate) fn player_bar(state: &Thedal) -> iced::widget::Container<'_, Message> {
    let status = state.playlist.status();
    let play_label = match status {
        PlaybackStatus::Playing | PlaybackStatus::Loading => "Pause",
        PlaybackStatus::Idle | PlaybackStatus::Paused | PlaybackStatus::Failed(_) => "Play",
    };

    let has_songs = !state.playlist.is_empty();
    let mut prev_btn = button("⏮");
    let mut play_btn = button(play_label);
    let mut next_btn = button("⏭");
    if has_songs {
        prev_btn = prev_btn.on_press(Message::Prev);
        play_btn = play_btn.on_press(Message::TogglePlayPause);
        next_btn = next_btn.on_press(Message::Next);
    }
    let shuffle_btn = toggle_button("Shuffle", state.playlist.is_shuffled(), Message::ToggleShuffle);

    let (title, credits) = match state.playlist.current() {
        Some(s) => (
            s.song.clone(),
            format!("{} · {} ({})", s.singer, s.movie, s.year),
        ),
        None => ("Nothing selected".to_string(), String::new()),
    };

    let detail: Element<'_, Message> = match status {
        PlaybackStatus::Failed(message) => row![
            text(format!("⚠ {message}")).size(SMALL_TEXT),
            button(text("Retry").size(SMALL_TEXT)).on_press(Message::Retry),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
        PlaybackStatus::Loading => text("Loading...").size(SMALL_TEXT).into(),
        PlaybackStatus::Idle => text(credits).size(SMALL_TEXT).into(),
        PlaybackStatus::Playing | PlaybackStatus::Paused => {
            let time_text = match state.duration_ms {
                Some(d) => format!("{} / {}", fmt_ms(state.position_ms), fmt_ms(d)),
                None => format!("{} / -:--", fmt_ms(state.position_ms)),
            };
            text(format!("{credits}   {time_text}"))
                .size(SMALL_TEXT)
                .into()
        }
    };

    // clamp for sanity; slider requires value within bounds
    let vol = state.volume.clamp(0.0, 1.0);
    let vol_slider = slider(0.0..=1.0, vol, Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(120.0));

    let bar = row![
        // left: transport
        row![prev_btn, play_btn, next_btn, shuffle_btn]
            .spacing(8)
            .align_y(Alignment::Center),
        // middle: now playing
        column![text(title).size(14), detail]
            .spacing(4)
            .width(Length::Fill),
        // right: volume
        row![text("Vol").size(SMALL_TEXT), vol_slider]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar).padding(12)
}
