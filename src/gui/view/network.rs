//! Collaboration panel: records (click to highlight), links of the highlighted
//! record, and per-role artist profiles. The timeline brush narrows records
//! and profiles to those active inside it.

use iced::widget::{Column, column, container, mouse_area, row, text};
use iced::{Alignment, Length};

use thedal::core::Role;
use thedal::core::aggregate::{CollaborationRecord, records_active_in};

use super::super::state::{Message, Thedal};
use super::constants::{ROW_H, ROW_HPAD, ROW_TEXT, ROW_VPAD, SMALL_TEXT};
use super::widgets::{empty_note, section};

fn span(record: &CollaborationRecord) -> String {
    match (record.first_year(), record.last_year()) {
        (Some(a), Some(b)) if a == b => a.to_string(),
        (Some(a), Some(b)) => format!("{a}–{b}"),
        _ => String::new(),
    }
}

fn records(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let chart = state.chart_view();

    let shown: Vec<&CollaborationRecord> =
        records_active_in(&snap.collaborations, chart.brush).collect();

    let title = match chart.brush {
        Some((a, b)) if a == b => format!("Collaborations ({}, active in {a})", shown.len()),
        Some((a, b)) => format!("Collaborations ({}, active {a}–{b})", shown.len()),
        None => format!("Collaborations ({})", shown.len()),
    };

    let mut col = column![section(title)].spacing(1);
    if shown.is_empty() {
        return col.push(empty_note("collaborations"));
    }

    for r in shown {
        let active = chart.highlighted.as_ref() == Some(&r.key);
        let marker = if active { "●" } else { "" };

        let cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(14.0)),
            text(format!(
                "{} · {} · {}",
                r.key.composer, r.key.singer, r.key.lyricist
            ))
            .size(ROW_TEXT)
            .width(Length::Fill),
            text(format!("{} songs", r.songs.len()))
                .size(ROW_TEXT)
                .width(Length::Fixed(64.0)),
            text(span(r)).size(ROW_TEXT).width(Length::Fixed(80.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        col = col.push(
            mouse_area(
                container(cells)
                    .padding([ROW_VPAD, ROW_HPAD])
                    .height(Length::Fixed(ROW_H))
                    .width(Length::Fill),
            )
            .on_press(Message::Highlight(Some(r.key.clone()))),
        );
    }
    col
}

fn links(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let chart = state.chart_view();

    let Some(index) = chart
        .highlighted
        .as_ref()
        .and_then(|k| snap.collaborations.iter().position(|r| &r.key == k))
    else {
        return column![text("Click a collaboration to see its links.").size(SMALL_TEXT)];
    };

    let mut col = column![section("Linked collaborations")].spacing(2);
    let mut any = false;
    for link in &snap.links {
        let other = if link.source == index {
            link.target
        } else if link.target == index {
            link.source
        } else {
            continue;
        };
        let Some(r) = snap.collaborations.get(other) else {
            continue;
        };

        any = true;
        col = col.push(
            text(format!(
                "[{}] {} · {} · {}  ({} shared)",
                link.strength.label(),
                r.key.composer,
                r.key.singer,
                r.key.lyricist,
                link.shared
            ))
            .size(ROW_TEXT),
        );
    }
    if !any {
        col = col.push(empty_note("links"));
    }
    col
}

fn profiles(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let brush = state.chart_view().brush;
    let top = state.limits.top_k;

    let mut col = column![section("Artists")].spacing(4);
    for role in Role::ALL {
        let mut ranked: Vec<_> = snap
            .profiles_for(role)
            .filter(|p| brush.is_none_or(|(a, b)| p.active_in(a, b)))
            .collect();
        // Stable: ties keep first-seen order.
        ranked.sort_by(|a, b| b.total_songs.cmp(&a.total_songs));

        col = col.push(text(role.dimension().plural()).size(ROW_TEXT));
        for p in ranked.into_iter().take(top) {
            let years = match (p.active_years.first(), p.active_years.last()) {
                (Some(a), Some(b)) if a != b => format!("{a}–{b}"),
                (Some(a), _) => a.to_string(),
                _ => String::new(),
            };
            col = col.push(
                text(format!(
                    "  {}: {} songs, {} collaborators, {years}",
                    p.name,
                    p.total_songs,
                    p.collaborator_count()
                ))
                .size(SMALL_TEXT),
            );
        }
    }
    col
}

pub(crate) fn build_network(state: &Thedal) -> Column<'_, Message> {
    column![records(state), links(state), profiles(state)].spacing(18)
}
