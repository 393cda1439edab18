//! Year and decade buckets, plus collaboration streams across decades.
//!
//! All outputs ascend by year/decade. Buckets only exist for years/decades
//! that actually occur in the input.

use std::collections::{BTreeMap, BTreeSet};

use super::collab::{CollaborationKey, CollaborationRecord};
use crate::core::types::Song;

/// Floor to the decade, correct for negative years too.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    pub year: i32,
    pub total: usize,
    pub composers: usize,
    pub singers: usize,
    pub lyricists: usize,
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeBucket {
    pub decade: i32,
    pub total: usize,
    pub composers: usize,
    pub singers: usize,
    pub lyricists: usize,
    /// Distinct (composer, singer, lyricist) tuples in the decade.
    pub collaborations: usize,
    pub songs: Vec<Song>,
}

impl DecadeBucket {
    pub fn label(&self) -> String {
        format!("{}s", self.decade)
    }
}

/// Running distinct-set accumulator shared by both bucket kinds.
#[derive(Default)]
struct Tally<'a> {
    composers: BTreeSet<&'a str>,
    singers: BTreeSet<&'a str>,
    lyricists: BTreeSet<&'a str>,
    tuples: BTreeSet<(&'a str, &'a str, &'a str)>,
    songs: Vec<Song>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, song: &'a Song) {
        self.composers.insert(song.composer.as_str());
        self.singers.insert(song.singer.as_str());
        self.lyricists.insert(song.lyricist.as_str());
        self.tuples.insert((
            song.composer.as_str(),
            song.singer.as_str(),
            song.lyricist.as_str(),
        ));
        self.songs.push(song.clone());
    }
}

fn tally_by<'a>(songs: &'a [Song], key: impl Fn(&Song) -> i32) -> BTreeMap<i32, Tally<'a>> {
    let mut map: BTreeMap<i32, Tally<'a>> = BTreeMap::new();
    for song in songs {
        map.entry(key(song)).or_default().add(song);
    }
    map
}

pub fn bucket_by_year(songs: &[Song]) -> Vec<YearBucket> {
    tally_by(songs, |s| s.year)
        .into_iter()
        .map(|(year, t)| YearBucket {
            year,
            total: t.songs.len(),
            composers: t.composers.len(),
            singers: t.singers.len(),
            lyricists: t.lyricists.len(),
            songs: t.songs,
        })
        .collect()
}

pub fn bucket_by_decade(songs: &[Song]) -> Vec<DecadeBucket> {
    tally_by(songs, |s| decade_of(s.year))
        .into_iter()
        .map(|(decade, t)| DecadeBucket {
            decade,
            total: t.songs.len(),
            composers: t.composers.len(),
            singers: t.singers.len(),
            lyricists: t.lyricists.len(),
            collaborations: t.tuples.len(),
            songs: t.songs,
        })
        .collect()
}

/// Collaboration records grouped by the decade of their earliest year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeStream {
    pub decade: i32,
    pub collaborations: Vec<CollaborationKey>,
    pub composers: BTreeSet<String>,
    pub singers: BTreeSet<String>,
    pub lyricists: BTreeSet<String>,
    pub total_songs: usize,
    /// Role values this stream shares with the next one (0 for the last).
    pub shared_with_next: usize,
}

impl DecadeStream {
    /// Role values present in both streams, counted per role.
    pub fn shared_artists(&self, other: &DecadeStream) -> usize {
        self.composers.intersection(&other.composers).count()
            + self.singers.intersection(&other.singers).count()
            + self.lyricists.intersection(&other.lyricists).count()
    }
}

pub fn decade_streams(records: &[CollaborationRecord]) -> Vec<DecadeStream> {
    let mut by_decade: BTreeMap<i32, DecadeStream> = BTreeMap::new();

    for rec in records {
        let Some(first) = rec.first_year() else {
            continue;
        };
        let decade = decade_of(first);

        let stream = by_decade.entry(decade).or_insert_with(|| DecadeStream {
            decade,
            collaborations: Vec::new(),
            composers: BTreeSet::new(),
            singers: BTreeSet::new(),
            lyricists: BTreeSet::new(),
            total_songs: 0,
            shared_with_next: 0,
        });

        stream.collaborations.push(rec.key.clone());
        stream.composers.insert(rec.key.composer.clone());
        stream.singers.insert(rec.key.singer.clone());
        stream.lyricists.insert(rec.key.lyricist.clone());
        stream.total_songs += rec.songs.len();
    }

    let mut streams: Vec<DecadeStream> = by_decade.into_values().collect();
    for i in 1..streams.len() {
        let shared = streams[i - 1].shared_artists(&streams[i]);
        streams[i - 1].shared_with_next = shared;
    }

    streams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::collab::group_collaborations;
    use crate::core::types::fixtures::{song, trio};

    #[test]
    fn decade_floor() {
        assert_eq!(decade_of(2019), 2010);
        assert_eq!(decade_of(2020), 2020);
        assert_eq!(decade_of(1969), 1960);
        assert_eq!(decade_of(-1), -10);
    }

    #[test]
    fn trio_decades() {
        let decades = bucket_by_decade(&trio());
        let summary: Vec<(i32, usize)> = decades.iter().map(|d| (d.decade, d.total)).collect();
        assert_eq!(summary, vec![(2010, 2), (2020, 1)]);
        assert_eq!(decades[0].composers, 1);
        assert_eq!(decades[0].singers, 2);
        assert_eq!(decades[0].collaborations, 2);
        assert_eq!(decades[0].label(), "2010s");
    }

    #[test]
    fn year_buckets_ascend_with_distinct_counts() {
        let songs = vec![
            song(1, 2018, "Sid", "C1", "L1", "M", "a"),
            song(2, 2011, "Sid", "C1", "L1", "M", "b"),
            song(3, 2018, "Sid", "C2", "L1", "M", "c"),
        ];
        let years = bucket_by_year(&songs);
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 2011);
        assert_eq!(years[1].year, 2018);
        assert_eq!(years[1].total, 2);
        assert_eq!(years[1].composers, 2);
        assert_eq!(years[1].singers, 1);
        assert_eq!(years[1].songs.len(), 2);
    }

    #[test]
    fn year_totals_sum_to_decade_total() {
        let songs = vec![
            song(1, 2011, "a", "b", "c", "m", "t"),
            song(2, 2015, "a", "b", "c", "m", "t"),
            song(3, 2015, "a", "b", "c", "m", "t"),
            song(4, 2021, "a", "b", "c", "m", "t"),
        ];
        let years = bucket_by_year(&songs);
        for d in bucket_by_decade(&songs) {
            let sum: usize = years
                .iter()
                .filter(|y| decade_of(y.year) == d.decade)
                .map(|y| y.total)
                .sum();
            assert_eq!(sum, d.total);
        }
    }

    #[test]
    fn empty_decades_are_not_materialized() {
        let songs = vec![
            song(1, 1975, "a", "b", "c", "m", "t"),
            song(2, 1995, "a", "b", "c", "m", "t"),
        ];
        let decades: Vec<i32> = bucket_by_decade(&songs).iter().map(|d| d.decade).collect();
        assert_eq!(decades, vec![1970, 1990]);
    }

    #[test]
    fn streams_count_shared_artists_with_next_decade() {
        let streams = decade_streams(&group_collaborations(&trio()));
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].decade, 2010);
        assert_eq!(streams[0].total_songs, 2);
        // singer A and lyricist P carry over into the 2020s
        assert_eq!(streams[0].shared_with_next, 2);
        assert_eq!(streams[1].shared_with_next, 0);
    }
}
