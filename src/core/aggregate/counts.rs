//! Per-dimension count tables.
//!
//! Ordering contract: descending by count, ties in first-seen order.
//! That falls out of one accumulation pass + a stable sort, and tests pin it.

use std::collections::{BTreeSet, HashMap};

use crate::core::types::{Dimension, DimensionValue, Song};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub value: DimensionValue,
    pub count: usize,
}

/// Count songs per value of `dimension`.
pub fn count_by(songs: &[Song], dimension: Dimension) -> Vec<CountEntry> {
    let mut slots: HashMap<DimensionValue, usize> = HashMap::new();
    let mut entries: Vec<CountEntry> = Vec::new();

    for song in songs {
        let value = song.value(dimension);
        match slots.get(&value) {
            Some(&i) => entries[i].count += 1,
            None => {
                slots.insert(value.clone(), entries.len());
                entries.push(CountEntry { value, count: 1 });
            }
        }
    }

    // `sort_by` is stable: equal counts keep insertion (first-seen) order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Keep the first `k` entries of an already sorted table.
pub fn top_k(mut entries: Vec<CountEntry>, k: usize) -> Vec<CountEntry> {
    entries.truncate(k);
    entries
}

pub fn total(entries: &[CountEntry]) -> usize {
    entries.iter().map(|e| e.count).sum()
}

/// Sorted distinct values (facet button lists).
pub fn distinct_values(songs: &[Song], dimension: Dimension) -> Vec<DimensionValue> {
    songs
        .iter()
        .map(|s| s.value(dimension))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Songs per year, ascending by year (line chart series).
pub fn year_series(songs: &[Song]) -> Vec<(i32, usize)> {
    let mut by_year: std::collections::BTreeMap<i32, usize> = Default::default();
    for s in songs {
        *by_year.entry(s.year).or_default() += 1;
    }
    by_year.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::fixtures::{song, trio};

    #[test]
    fn composer_counts_for_trio() {
        let table = count_by(&trio(), Dimension::Composer);
        assert_eq!(
            table,
            vec![
                CountEntry {
                    value: DimensionValue::Composer("X".into()),
                    count: 2
                },
                CountEntry {
                    value: DimensionValue::Composer("Y".into()),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let songs = vec![
            song(1, 2000, "Zed", "c", "l", "m", "t"),
            song(2, 2000, "Amy", "c", "l", "m", "t"),
            song(3, 2000, "Max", "c", "l", "m", "t"),
            song(4, 2000, "Max", "c", "l", "m", "t"),
        ];
        let names: Vec<String> = count_by(&songs, Dimension::Singer)
            .into_iter()
            .map(|e| e.value.to_string())
            .collect();
        assert_eq!(names, vec!["Max", "Zed", "Amy"]);
    }

    #[test]
    fn counts_sum_to_song_total() {
        let songs = trio();
        assert_eq!(total(&count_by(&songs, Dimension::Singer)), songs.len());
        assert_eq!(total(&count_by(&songs, Dimension::Year)), songs.len());
    }

    #[test]
    fn top_k_truncates_after_sorting() {
        let songs = vec![
            song(1, 2000, "a", "c", "l", "m", "t"),
            song(2, 2000, "b", "c", "l", "m", "t"),
            song(3, 2000, "b", "c", "l", "m", "t"),
        ];
        let top = top_k(count_by(&songs, Dimension::Singer), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].value, DimensionValue::Singer("b".into()));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        assert!(count_by(&[], Dimension::Lyricist).is_empty());
        assert!(year_series(&[]).is_empty());
    }

    #[test]
    fn distinct_values_are_sorted() {
        let values = distinct_values(&trio(), Dimension::Year);
        assert_eq!(
            values,
            vec![DimensionValue::Year(2010), DimensionValue::Year(2020)]
        );
    }

    #[test]
    fn year_series_ascends() {
        assert_eq!(year_series(&trio()), vec![(2010, 2), (2020, 1)]);
    }
}
