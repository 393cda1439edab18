//! Timeline panel: songs per year (drill + brush), decade table, decade streams.

use iced::widget::{Column, button, column, row, text};
use iced::{Alignment, Length};

use thedal::core::{DimensionValue, FilterCommand};

use super::super::state::{Message, Thedal};
use super::constants::{ROW_TEXT, SMALL_TEXT};
use super::widgets::{bar_cells, bar_row, empty_note, section};

fn in_brush(brush: Option<(i32, i32)>, year: i32) -> bool {
    brush.is_some_and(|(a, b)| (a..=b).contains(&year))
}

fn years(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let chart = state.chart_view();
    let drill = state
        .filters
        .criteria()
        .drill(thedal::core::Dimension::Year)
        .cloned();
    let cells = bar_cells(state);
    let max = snap.year_series.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let brush_note = match chart.brush {
        Some((a, b)) if a == b => format!("Brush: {a} (click another year to extend)"),
        Some((a, b)) => {
            let songs: usize = snap
                .years
                .iter()
                .filter(|y| in_brush(chart.brush, y.year))
                .map(|y| y.total)
                .sum();
            format!("Brush: {a}–{b}, {songs} songs")
        }
        None => "Brush: click ⟷ on two years".to_string(),
    };

    let mut brush_row = row![text(brush_note).size(SMALL_TEXT)]
        .spacing(8)
        .align_y(Alignment::Center);
    if chart.brush.is_some() {
        brush_row = brush_row.push(button(text("Clear").size(SMALL_TEXT)).on_press(Message::ClearBrush));
    }

    let mut col = column![section("Songs per year"), brush_row].spacing(2);
    if snap.year_series.is_empty() {
        return col.push(empty_note("years"));
    }

    for &(year, count) in &snap.year_series {
        let value = DimensionValue::Year(year);
        let marker = if drill.as_ref() == Some(&value) {
            "▶"
        } else if in_brush(chart.brush, year) {
            "▌"
        } else {
            ""
        };

        col = col.push(
            row![
                bar_row(
                    marker,
                    year.to_string(),
                    count,
                    max,
                    cells,
                    Message::Filter(FilterCommand::ToggleDrill(value)),
                ),
                button(text("⟷").size(SMALL_TEXT)).on_press(Message::BrushYear(year)),
            ]
            .spacing(4)
            .align_y(Alignment::Center),
        );
    }
    col
}

fn decades(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();

    let header = row![
        text("Decade").size(ROW_TEXT).width(Length::Fixed(70.0)),
        text("Songs").size(ROW_TEXT).width(Length::Fixed(60.0)),
        text("Composers").size(ROW_TEXT).width(Length::Fixed(80.0)),
        text("Singers").size(ROW_TEXT).width(Length::Fixed(70.0)),
        text("Lyricists").size(ROW_TEXT).width(Length::Fixed(70.0)),
        text("Collabs").size(ROW_TEXT).width(Length::Fixed(70.0)),
    ]
    .spacing(8);

    let mut col = column![section("Decades"), header].spacing(2);
    for d in &snap.decades {
        col = col.push(
            row![
                text(d.label()).size(ROW_TEXT).width(Length::Fixed(70.0)),
                text(d.total.to_string()).size(ROW_TEXT).width(Length::Fixed(60.0)),
                text(d.composers.to_string()).size(ROW_TEXT).width(Length::Fixed(80.0)),
                text(d.singers.to_string()).size(ROW_TEXT).width(Length::Fixed(70.0)),
                text(d.lyricists.to_string()).size(ROW_TEXT).width(Length::Fixed(70.0)),
                text(d.collaborations.to_string())
                    .size(ROW_TEXT)
                    .width(Length::Fixed(70.0)),
            ]
            .spacing(8),
        );
    }
    col
}

fn streams(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();

    let mut col = column![section("Collaboration streams")].spacing(4);
    if snap.streams.is_empty() {
        return col.push(empty_note("collaborations"));
    }

    let last = snap.streams.len() - 1;
    for (i, s) in snap.streams.iter().enumerate() {
        let flow = if i == last {
            String::new()
        } else {
            format!("  → {} shared with next", s.shared_with_next)
        };
        col = col.push(
            text(format!(
                "{}s: {} collaborations, {} songs, {}/{}/{} composers/singers/lyricists{flow}",
                s.decade,
                s.collaborations.len(),
                s.total_songs,
                s.composers.len(),
                s.singers.len(),
                s.lyricists.len(),
            ))
            .size(ROW_TEXT),
        );
    }
    col
}

pub(crate) fn build_timeline(state: &Thedal) -> Column<'_, Message> {
    column![years(state), decades(state), streams(state)].spacing(18)
}

#[cfg(test)]
mod tests {
    use super::in_brush;

    #[test]
    fn brush_is_inclusive() {
        assert!(in_brush(Some((2010, 2012)), 2010));
        assert!(in_brush(Some((2010, 2012)), 2012));
        assert!(!in_brush(Some((2010, 2012)), 2013));
        assert!(!in_brush(None, 2010));
    }
}
