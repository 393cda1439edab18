//! core/filter.rs
//! Filter engine: (catalog, criteria) -> filtered songs.
//!
//! - Pure, no IO, no logging on the hot path.
//! - Output keeps catalog order. Presentation order (by title) is
//!   `sort_by_title`, applied by the playlist, not here.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Dimension, DimensionValue, Song};

/// Active filter criteria.
///
/// `FilterCriteria::default()` is the identity: every song matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text, tokenized on runs of commas/whitespace.
    pub search: String,

    /// Multi-select facets. A missing or empty set = no restriction.
    pub facets: BTreeMap<Dimension, BTreeSet<DimensionValue>>,

    /// Single-value chart drills, at most one per dimension.
    pub drills: BTreeMap<Dimension, DimensionValue>,
}

impl FilterCriteria {
    pub fn is_identity(&self) -> bool {
        self.search.trim().is_empty()
            && self.facets.values().all(BTreeSet::is_empty)
            && self.drills.is_empty()
    }

    pub fn facet_len(&self, dimension: Dimension) -> usize {
        self.facets.get(&dimension).map_or(0, BTreeSet::len)
    }

    pub fn is_selected(&self, value: &DimensionValue) -> bool {
        self.facets
            .get(&value.dimension())
            .is_some_and(|set| set.contains(value))
    }

    pub fn drill(&self, dimension: Dimension) -> Option<&DimensionValue> {
        self.drills.get(&dimension)
    }

    /// Builders, mostly for tests.
    pub fn with_facet(mut self, values: impl IntoIterator<Item = DimensionValue>) -> Self {
        for v in values {
            self.facets.entry(v.dimension()).or_default().insert(v);
        }
        self
    }

    pub fn with_drill(mut self, value: DimensionValue) -> Self {
        self.drills.insert(value.dimension(), value);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Split free text into lowercase search tokens.
///
/// Separators are commas and any whitespace; runs collapse, empties drop.
pub fn search_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Every token must hit at least one searchable field (AND across tokens,
/// OR across fields).
fn matches_search(song: &Song, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let fields: Vec<String> = song
        .searchable_fields()
        .iter()
        .map(|f| f.to_lowercase())
        .collect();

    tokens
        .iter()
        .all(|token| fields.iter().any(|field| field.contains(token.as_str())))
}

fn matches_facets(song: &Song, criteria: &FilterCriteria) -> bool {
    criteria
        .facets
        .values()
        .all(|set| set.is_empty() || set.iter().any(|v| song.has(v)))
}

fn matches_drills(song: &Song, criteria: &FilterCriteria) -> bool {
    criteria.drills.values().all(|v| song.has(v))
}

/// `tokens` is `search_tokens(&criteria.search)`, split once per pass.
fn keep(song: &Song, tokens: &[String], criteria: &FilterCriteria) -> bool {
    matches_search(song, tokens) && matches_facets(song, criteria) && matches_drills(song, criteria)
}

/// Filter the catalog. Catalog order is preserved.
pub fn filter_songs(catalog: &[Song], criteria: &FilterCriteria) -> Vec<Song> {
    let tokens = search_tokens(&criteria.search);

    catalog
        .iter()
        .filter(|song| keep(song, &tokens, criteria))
        .cloned()
        .collect()
}

/// Stable, case-insensitive sort by song title.
pub fn sort_by_title(songs: &mut [Song]) {
    songs.sort_by_cached_key(|s| s.song.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::fixtures::{song, trio};

    fn ids(songs: &[Song]) -> Vec<u32> {
        songs.iter().map(|s| s.id).collect()
    }

    #[test]
    fn identity_criteria_returns_catalog_in_order() {
        let catalog = trio();
        let out = filter_songs(&catalog, &FilterCriteria::default());
        assert_eq!(out, catalog);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = trio();
        let criteria = FilterCriteria::default().with_search("x");
        assert_eq!(
            filter_songs(&catalog, &criteria),
            filter_songs(&catalog, &criteria)
        );
    }

    #[test]
    fn singer_facet_selects_songs_one_and_three() {
        let criteria =
            FilterCriteria::default().with_facet([DimensionValue::Singer("A".into())]);
        assert_eq!(ids(&filter_songs(&trio(), &criteria)), vec![1, 3]);
    }

    #[test]
    fn facet_values_or_within_dimension_and_across_dimensions() {
        let criteria = FilterCriteria::default()
            .with_facet([
                DimensionValue::Singer("A".into()),
                DimensionValue::Singer("B".into()),
            ])
            .with_facet([DimensionValue::Year(2010)]);
        assert_eq!(ids(&filter_songs(&trio(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn drill_requires_exact_match() {
        let criteria = FilterCriteria::default().with_drill(DimensionValue::Composer("Y".into()));
        assert_eq!(ids(&filter_songs(&trio(), &criteria)), vec![3]);

        let none = FilterCriteria::default().with_drill(DimensionValue::Composer("y".into()));
        assert!(filter_songs(&trio(), &none).is_empty());
    }

    #[test]
    fn tokens_split_on_commas_and_whitespace_runs() {
        assert_eq!(search_tokens(" Rahman,, sid\tSriram "), vec!["rahman", "sid", "sriram"]);
        assert!(search_tokens(" ,  ,").is_empty());
    }

    #[test]
    fn every_token_must_match_some_field() {
        let catalog = vec![
            song(1, 2019, "Sid Sriram", "Anirudh", "Vivek", "Jersey", "Adhento"),
            song(2, 2018, "Sid Sriram", "Gopi Sundar", "Ananta", "Geetha", "Inkem"),
        ];

        let one = filter_songs(&catalog, &FilterCriteria::default().with_search("sid"));
        assert_eq!(ids(&one), vec![1, 2]);

        let both = filter_songs(&catalog, &FilterCriteria::default().with_search("SID, anirudh"));
        assert_eq!(ids(&both), vec![1]);

        let nothing = filter_songs(&catalog, &FilterCriteria::default().with_search("sid zzz"));
        assert!(nothing.is_empty());
    }

    #[test]
    fn two_tokens_are_a_subset_of_one() {
        let catalog = trio();
        let t1 = filter_songs(&catalog, &FilterCriteria::default().with_search("M1"));
        let t12 = filter_songs(&catalog, &FilterCriteria::default().with_search("M1 Q"));
        assert!(t12.iter().all(|s| t1.contains(s)));
    }

    #[test]
    fn blank_search_is_no_restriction() {
        let criteria = FilterCriteria::default().with_search("   ");
        assert!(criteria.is_identity());
        assert_eq!(filter_songs(&trio(), &criteria).len(), 3);
    }

    #[test]
    fn adding_facet_value_to_narrow_dimension_never_grows_past_previous() {
        let catalog = trio();
        let base = FilterCriteria::default().with_facet([DimensionValue::Composer("X".into())]);
        let narrowed = base.clone().with_facet([DimensionValue::Lyricist("P".into())]);
        assert!(filter_songs(&catalog, &narrowed).len() <= filter_songs(&catalog, &base).len());
    }

    #[test]
    fn sort_by_title_is_case_insensitive_and_stable() {
        let mut songs = vec![
            song(1, 2000, "a", "b", "c", "m", "beta"),
            song(2, 2000, "a", "b", "c", "m", "Alpha"),
            song(3, 2000, "a", "b", "c", "m", "alpha"),
        ];
        sort_by_title(&mut songs);
        assert_eq!(ids(&songs), vec![2, 3, 1]);
    }
}
