//! core/snapshot.rs
//! One filter revision's worth of derived data.
//!
//! The views read a `Snapshot` and nothing else. `SnapshotCache` keeps the
//! last one and only recomputes when the catalog, criteria or limits change.

use tracing::debug;

use super::aggregate::{
    ArtistProfile, CollaborationLink, CollaborationRecord, CountEntry, DecadeBucket, DecadeStream,
    HierarchyNode, RadarSeries, TreemapGroup, YearBucket, artist_profiles, bucket_by_decade,
    bucket_by_year, count_by, decade_streams, group_collaborations, link_collaborations, radar,
    sunburst, top_k, treemap, year_series,
};
use super::catalog::Catalog;
use super::filter::{FilterCriteria, filter_songs};
use super::types::{Dimension, Role, Song};

/// How much of each aggregate a layout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    /// Entries kept per ranked count table.
    pub top_k: usize,
    pub treemap_groups: usize,
    pub radar_singers: usize,
    /// Cap on songs fed to the heavy visual aggregates (collaborations,
    /// links, streams, profiles, sunburst, treemap, radar). `None` = no cap.
    ///
    /// Counts, year/decade buckets and `filtered` always see the full list,
    /// so under a cap `DecadeBucket::collaborations` can exceed the number of
    /// records in `Snapshot::collaborations`.
    pub max_songs: Option<usize>,
}

impl DisplayLimits {
    pub const DESKTOP: DisplayLimits = DisplayLimits {
        top_k: 8,
        treemap_groups: 8,
        radar_singers: 6,
        max_songs: None,
    };

    pub const COMPACT: DisplayLimits = DisplayLimits {
        top_k: 6,
        treemap_groups: 6,
        radar_singers: 4,
        max_songs: Some(50),
    };
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::DESKTOP
    }
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Filtered songs in catalog order (uncapped).
    pub filtered: Vec<Song>,

    pub singers: Vec<CountEntry>,
    pub composers: Vec<CountEntry>,
    pub lyricists: Vec<CountEntry>,
    pub year_series: Vec<(i32, usize)>,

    pub years: Vec<YearBucket>,
    pub decades: Vec<DecadeBucket>,

    pub collaborations: Vec<CollaborationRecord>,
    pub links: Vec<CollaborationLink>,
    pub streams: Vec<DecadeStream>,
    pub profiles: Vec<ArtistProfile>,

    pub sunburst: Option<HierarchyNode>,
    pub treemap: Vec<TreemapGroup>,
    pub radar: Option<RadarSeries>,
}

impl Snapshot {
    pub fn compute(catalog: &[Song], criteria: &FilterCriteria, limits: DisplayLimits) -> Self {
        let filtered = filter_songs(catalog, criteria);

        let visual: &[Song] = match limits.max_songs {
            Some(cap) if filtered.len() > cap => &filtered[..cap],
            _ => &filtered,
        };

        let collaborations = group_collaborations(visual);
        let links = link_collaborations(&collaborations);
        let streams = decade_streams(&collaborations);

        let mut profiles = Vec::new();
        for role in Role::ALL {
            profiles.extend(artist_profiles(visual, role));
        }

        let sunburst = (!visual.is_empty()).then(|| sunburst(visual));
        let treemap = treemap(visual, limits.treemap_groups);
        let radar = (!visual.is_empty()).then(|| radar(visual, limits.radar_singers));

        Self {
            singers: top_k(count_by(&filtered, Dimension::Singer), limits.top_k),
            composers: top_k(count_by(&filtered, Dimension::Composer), limits.top_k),
            lyricists: top_k(count_by(&filtered, Dimension::Lyricist), limits.top_k),
            year_series: year_series(&filtered),

            years: bucket_by_year(&filtered),
            decades: bucket_by_decade(&filtered),

            sunburst,
            treemap,
            radar,
            collaborations,
            links,
            streams,
            profiles,
            filtered,
        }
    }

    pub fn counts(&self, dimension: Dimension) -> &[CountEntry] {
        match dimension {
            Dimension::Singer => &self.singers,
            Dimension::Composer => &self.composers,
            Dimension::Lyricist => &self.lyricists,
            Dimension::Year => &[],
        }
    }

    pub fn profiles_for(&self, role: Role) -> impl Iterator<Item = &ArtistProfile> {
        self.profiles.iter().filter(move |p| p.role == role)
    }
}

/// Memo of the last snapshot.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    key: Option<(u64, FilterCriteria, DisplayLimits)>,
    snapshot: Snapshot,
}

impl SnapshotCache {
    /// Current snapshot, recomputed only if an input changed.
    pub fn get(
        &mut self,
        catalog: &Catalog,
        criteria: &FilterCriteria,
        limits: DisplayLimits,
    ) -> &Snapshot {
        let fresh = self.key.as_ref().is_some_and(|(rev, c, l)| {
            *rev == catalog.revision() && c == criteria && *l == limits
        });

        if !fresh {
            self.snapshot = Snapshot::compute(catalog.songs(), criteria, limits);
            self.key = Some((catalog.revision(), criteria.clone(), limits));
            debug!(
                filtered = self.snapshot.filtered.len(),
                catalog = catalog.len(),
                "snapshot recomputed"
            );
        }

        &self.snapshot
    }

    /// Last computed snapshot (may be stale; call `get` after changes).
    pub fn last(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DimensionValue;
    use crate::core::types::fixtures::trio;

    #[test]
    fn snapshot_of_trio() {
        let snap = Snapshot::compute(&trio(), &FilterCriteria::default(), DisplayLimits::DESKTOP);
        assert_eq!(snap.filtered.len(), 3);
        assert_eq!(snap.composers[0].value, DimensionValue::Composer("X".into()));
        assert_eq!(snap.decades.len(), 2);
        assert_eq!(snap.collaborations.len(), 3);
        assert_eq!(snap.links.len(), 2);
        assert_eq!(snap.sunburst.as_ref().map(|n| n.value), Some(3));
        assert_eq!(snap.profiles_for(Role::Singer).count(), 2);
    }

    #[test]
    fn empty_result_is_valid() {
        let criteria = FilterCriteria::default().with_search("no such song");
        let snap = Snapshot::compute(&trio(), &criteria, DisplayLimits::DESKTOP);
        assert!(snap.filtered.is_empty());
        assert!(snap.singers.is_empty());
        assert!(snap.sunburst.is_none());
        assert!(snap.radar.is_none());
    }

    #[test]
    fn top_k_comes_from_limits() {
        let limits = DisplayLimits {
            top_k: 1,
            ..DisplayLimits::DESKTOP
        };
        let snap = Snapshot::compute(&trio(), &FilterCriteria::default(), limits);
        assert_eq!(snap.singers.len(), 1);
        assert_eq!(snap.counts(Dimension::Singer).len(), 1);
    }

    #[test]
    fn song_cap_only_applies_to_visual_aggregates() {
        let limits = DisplayLimits {
            max_songs: Some(1),
            ..DisplayLimits::DESKTOP
        };
        let snap = Snapshot::compute(&trio(), &FilterCriteria::default(), limits);
        assert_eq!(snap.filtered.len(), 3);
        assert_eq!(snap.collaborations.len(), 1);
        assert_eq!(snap.decades.iter().map(|d| d.total).sum::<usize>(), 3);
        let decade_records: usize = snap.decades.iter().map(|d| d.collaborations).sum();
        assert_eq!(decade_records, 3);
    }

    #[test]
    fn cache_recomputes_only_on_change() {
        let catalog = Catalog::from_songs(trio()).expect("valid");
        let mut cache = SnapshotCache::default();

        let criteria = FilterCriteria::default();
        assert_eq!(cache.get(&catalog, &criteria, DisplayLimits::DESKTOP).filtered.len(), 3);

        let narrowed = criteria.with_drill(DimensionValue::Year(2020));
        assert_eq!(cache.get(&catalog, &narrowed, DisplayLimits::DESKTOP).filtered.len(), 1);
        assert_eq!(cache.last().filtered.len(), 1);
    }
}
