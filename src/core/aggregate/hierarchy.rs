//! Nested views: sunburst tree, composer/singer treemap, singer radar.

use std::collections::HashMap;

use super::counts::{count_by, top_k};
use super::timeline::decade_of;
use crate::core::types::{Dimension, DimensionValue, Song};

pub const SUNBURST_ROOT: &str = "All Songs";

/// One node of the sunburst tree. `value` is the song count under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub label: String,
    /// Drill target when clicked (`None` for root and decade rings).
    pub target: Option<DimensionValue>,
    pub value: usize,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn new(label: String, target: Option<DimensionValue>) -> Self {
        Self {
            label,
            target,
            value: 0,
            children: Vec::new(),
        }
    }

    /// Child with `label`, created on first use (first-seen order).
    fn child(&mut self, label: &str, target: Option<DimensionValue>) -> &mut HierarchyNode {
        let i = match self.children.iter().position(|c| c.label == label) {
            Some(i) => i,
            None => {
                self.children.push(HierarchyNode::new(label.to_string(), target));
                self.children.len() - 1
            }
        };
        &mut self.children[i]
    }
}

/// Decade -> lyricist -> composer -> singer.
pub fn sunburst(songs: &[Song]) -> HierarchyNode {
    let mut root = HierarchyNode::new(SUNBURST_ROOT.to_string(), None);

    for song in songs {
        root.value += 1;

        let decade = root.child(&format!("{}s", decade_of(song.year)), None);
        decade.value += 1;

        let lyricist = decade.child(
            &song.lyricist,
            Some(DimensionValue::Lyricist(song.lyricist.clone())),
        );
        lyricist.value += 1;

        let composer = lyricist.child(
            &song.composer,
            Some(DimensionValue::Composer(song.composer.clone())),
        );
        composer.value += 1;

        let singer = composer.child(
            &song.singer,
            Some(DimensionValue::Singer(song.singer.clone())),
        );
        singer.value += 1;
    }

    root
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreemapGroup {
    pub composer: String,
    /// (singer, songs) in first-seen order.
    pub singers: Vec<(String, usize)>,
}

impl TreemapGroup {
    pub fn total(&self) -> usize {
        self.singers.iter().map(|(_, n)| n).sum()
    }
}

/// Composer -> singer song counts; first `max_groups` composers by first appearance.
pub fn treemap(songs: &[Song], max_groups: usize) -> Vec<TreemapGroup> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<TreemapGroup> = Vec::new();

    for song in songs {
        let i = *slots.entry(song.composer.as_str()).or_insert_with(|| {
            groups.push(TreemapGroup {
                composer: song.composer.clone(),
                singers: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[i];
        match group.singers.iter_mut().find(|(s, _)| *s == song.singer) {
            Some((_, n)) => *n += 1,
            None => group.singers.push((song.singer.clone(), 1)),
        }
    }

    groups.truncate(max_groups);
    groups
}

/// Years (ascending) x top singers, one count per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarSeries {
    pub singers: Vec<String>,
    pub years: Vec<i32>,
    /// `rows[y][s]` = songs by `singers[s]` in `years[y]`.
    pub rows: Vec<Vec<usize>>,
}

pub fn radar(songs: &[Song], top: usize) -> RadarSeries {
    let singers: Vec<String> = top_k(count_by(songs, Dimension::Singer), top)
        .into_iter()
        .map(|e| e.value.to_string())
        .collect();

    let mut years: Vec<i32> = songs.iter().map(|s| s.year).collect();
    years.sort_unstable();
    years.dedup();

    let rows = years
        .iter()
        .map(|&year| {
            singers
                .iter()
                .map(|singer| {
                    songs
                        .iter()
                        .filter(|s| s.year == year && s.singer == *singer)
                        .count()
                })
                .collect()
        })
        .collect();

    RadarSeries {
        singers,
        years,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::fixtures::{song, trio};

    fn depth(node: &HierarchyNode) -> usize {
        1 + node.children.iter().map(depth).max().unwrap_or(0)
    }

    #[test]
    fn sunburst_counts_roll_up() {
        let root = sunburst(&trio());
        assert_eq!(root.label, SUNBURST_ROOT);
        assert_eq!(root.value, 3);
        assert_eq!(depth(&root), 5);

        let labels: Vec<&str> = root.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["2010s", "2020s"]);

        let d2010 = &root.children[0];
        assert_eq!(d2010.value, 2);
        // lyricists P and Q under 2010s
        assert_eq!(d2010.children.len(), 2);
        assert_eq!(
            d2010.children[0].target,
            Some(DimensionValue::Lyricist("P".into()))
        );

        let child_sum: usize = root.children.iter().map(|c| c.value).sum();
        assert_eq!(child_sum, root.value);
    }

    #[test]
    fn treemap_groups_by_composer_then_singer() {
        let songs = vec![
            song(1, 2000, "S1", "C1", "l", "m", "t"),
            song(2, 2000, "S1", "C1", "l", "m", "t"),
            song(3, 2000, "S2", "C1", "l", "m", "t"),
            song(4, 2000, "S1", "C2", "l", "m", "t"),
        ];
        let groups = treemap(&songs, 8);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].composer, "C1");
        assert_eq!(groups[0].singers, vec![("S1".to_string(), 2), ("S2".to_string(), 1)]);
        assert_eq!(groups[0].total(), 3);

        assert_eq!(treemap(&songs, 1).len(), 1);
    }

    #[test]
    fn radar_rows_follow_years_and_top_singers() {
        let series = radar(&trio(), 6);
        assert_eq!(series.singers, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(series.years, vec![2010, 2020]);
        assert_eq!(series.rows, vec![vec![1, 1], vec![1, 0]]);
    }
}
