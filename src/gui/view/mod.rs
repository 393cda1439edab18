//! GUI renderer (reads state + the current snapshot, produces widgets; no mutation).

mod charts;
mod compact;
mod constants;
mod facets;
mod header;
mod hierarchy;
mod network;
mod playlist;
mod timeline;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row};

use thedal::config::Layout;

use super::state::{Message, Thedal};
use constants::{PLAYER_H, PLAYLIST_W, SIDEBAR_W};

pub(crate) use constants::TITLE;

pub(crate) fn view(state: &Thedal) -> Column<'_, Message> {
    match state.layout {
        Layout::Desktop => desktop(state),
        Layout::Compact => compact::view(state),
    }
}

fn desktop(state: &Thedal) -> Column<'_, Message> {
    let header = header::build_header(state);
    let player = widgets::player_bar(state).height(Length::Fixed(PLAYER_H));

    let facets = facets::build_facets(state).width(Length::Fixed(SIDEBAR_W));
    let charts = charts::build_charts(state).width(Length::Fill);
    let playlist = playlist::build_playlist(state).width(Length::Fixed(PLAYLIST_W));

    let body = row![facets, charts, playlist]
        .spacing(12)
        .height(Length::Fill);
    column![header, body, player].spacing(8).padding(8)
}
