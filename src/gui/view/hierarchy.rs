//! Hierarchy panel: zoomable sunburst (as nested bars), treemap, radar grid.

use iced::widget::{Column, button, column, row, text};
use iced::{Alignment, Length};

use thedal::core::FilterCommand;
use thedal::core::aggregate::HierarchyNode;

use super::super::state::{Message, Thedal};
use super::constants::{ROW_TEXT, SMALL_TEXT};
use super::widgets::{bar, bar_cells, bar_row, empty_note, section};

/// Walk `path` down from `root`, stopping at the deepest label that still exists.
fn zoomed<'n>(root: &'n HierarchyNode, path: &[String]) -> (&'n HierarchyNode, usize) {
    let mut node = root;
    let mut depth = 0;
    for label in path {
        match node.children.iter().find(|c| &c.label == label) {
            Some(child) => {
                node = child;
                depth += 1;
            }
            None => break,
        }
    }
    (node, depth)
}

fn sunburst(state: &Thedal) -> Column<'_, Message> {
    let mut col = column![section("Sunburst: decade → lyricist → composer → singer")].spacing(2);

    let Some(root) = state.snapshot().sunburst.as_ref() else {
        return col.push(empty_note("songs"));
    };

    let chart = state.chart_view();
    let (node, depth) = zoomed(root, &chart.focus);
    let path: Vec<String> = chart.focus[..depth].to_vec();

    // Breadcrumbs: each one zooms back out to that level.
    let mut crumbs = row![
        button(text(root.label.clone()).size(SMALL_TEXT)).on_press(Message::FocusSunburst(Vec::new()))
    ]
    .spacing(4)
    .align_y(Alignment::Center);
    for (i, label) in path.iter().enumerate() {
        crumbs = crumbs.push(text("›").size(SMALL_TEXT));
        crumbs = crumbs.push(
            button(text(label.clone()).size(SMALL_TEXT))
                .on_press(Message::FocusSunburst(path[..=i].to_vec())),
        );
    }
    col = col.push(crumbs.wrap());

    if let Some(target) = &node.target {
        col = col.push(
            button(text(format!("Filter by {target}")).size(SMALL_TEXT))
                .on_press(Message::Filter(FilterCommand::ToggleDrill(target.clone()))),
        );
    }

    let cells = bar_cells(state);
    let max = node.children.iter().map(|c| c.value).max().unwrap_or(0);
    for child in &node.children {
        let on_press = if child.children.is_empty() {
            match &child.target {
                Some(t) => Message::Filter(FilterCommand::ToggleDrill(t.clone())),
                None => continue,
            }
        } else {
            let mut deeper = path.clone();
            deeper.push(child.label.clone());
            Message::FocusSunburst(deeper)
        };
        let marker = if child.children.is_empty() { "" } else { "›" };
        col = col.push(bar_row(
            marker,
            child.label.clone(),
            child.value,
            max,
            cells,
            on_press,
        ));
    }
    col
}

fn treemap(state: &Thedal) -> Column<'_, Message> {
    let snap = state.snapshot();
    let cells = bar_cells(state);

    let mut col = column![section("Composers → singers")].spacing(2);
    if snap.treemap.is_empty() {
        return col.push(empty_note("composers"));
    }

    let max = snap.treemap.iter().map(|g| g.total()).max().unwrap_or(0);
    for group in &snap.treemap {
        let singers = group
            .singers
            .iter()
            .map(|(s, n)| format!("{s} ({n})"))
            .collect::<Vec<_>>()
            .join(", ");
        col = col.push(
            column![
                text(format!(
                    "{} {} {}",
                    group.composer,
                    bar(group.total(), max, cells),
                    group.total()
                ))
                .size(ROW_TEXT),
                text(format!("    {singers}")).size(SMALL_TEXT),
            ]
            .spacing(1),
        );
    }
    col
}

fn radar(state: &Thedal) -> Column<'_, Message> {
    let mut col = column![section("Singers by year")].spacing(2);

    let Some(series) = state.snapshot().radar.as_ref() else {
        return col.push(empty_note("singers"));
    };

    let mut header = row![text("").size(SMALL_TEXT).width(Length::Fixed(50.0))].spacing(6);
    for s in &series.singers {
        header = header.push(text(s.clone()).size(SMALL_TEXT).width(Length::Fixed(90.0)));
    }
    col = col.push(header);

    for (year, counts) in series.years.iter().zip(&series.rows) {
        let mut line = row![text(year.to_string()).size(SMALL_TEXT).width(Length::Fixed(50.0))]
            .spacing(6);
        for n in counts {
            let cell = if *n == 0 { "·".to_string() } else { n.to_string() };
            line = line.push(text(cell).size(SMALL_TEXT).width(Length::Fixed(90.0)));
        }
        col = col.push(line);
    }
    col
}

pub(crate) fn build_hierarchy(state: &Thedal) -> Column<'_, Message> {
    column![sunburst(state), treemap(state), radar(state)].spacing(18)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str, children: Vec<HierarchyNode>) -> HierarchyNode {
        HierarchyNode {
            label: label.to_string(),
            target: None,
            value: 1,
            children,
        }
    }

    #[test]
    fn zoom_stops_at_deepest_existing_label() {
        let root = node("All Songs", vec![node("2010s", vec![node("Vairamuthu", vec![])])]);

        let (n, depth) = zoomed(&root, &["2010s".into(), "Vairamuthu".into()]);
        assert_eq!((n.label.as_str(), depth), ("Vairamuthu", 2));

        let (n, depth) = zoomed(&root, &["2010s".into(), "Gulzar".into()]);
        assert_eq!((n.label.as_str(), depth), ("2010s", 1));

        let (n, depth) = zoomed(&root, &[]);
        assert_eq!((n.label.as_str(), depth), ("All Songs", 0));
    }
}
