//! Core data types shared between the pipeline and the UI.
//!
//! Rule of thumb:
//! - These structs are boring bags of data
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! `Song` is ONE catalog record. Everything else in `core` is derived from a
//! slice of songs.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Stable catalog key. Unique within one catalog.
pub type SongId = u32;

/// One song record.
///
/// All text fields are non-empty (the catalog loader enforces it).
/// `audio` is only set when the song came from a local file import.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub movie: String,
    pub year: i32,
    pub song: String,
    pub composer: String,
    pub singer: String,
    pub lyricist: String,

    #[serde(default)]
    pub audio: Option<PathBuf>,
}

impl Song {
    /// The song's value along `dimension`.
    pub fn value(&self, dimension: Dimension) -> DimensionValue {
        match dimension {
            Dimension::Year => DimensionValue::Year(self.year),
            Dimension::Singer => DimensionValue::Singer(self.singer.clone()),
            Dimension::Composer => DimensionValue::Composer(self.composer.clone()),
            Dimension::Lyricist => DimensionValue::Lyricist(self.lyricist.clone()),
        }
    }

    /// Exact equality against one dimension value, without allocating.
    pub fn has(&self, value: &DimensionValue) -> bool {
        match value {
            DimensionValue::Year(y) => self.year == *y,
            DimensionValue::Singer(s) => self.singer == *s,
            DimensionValue::Composer(c) => self.composer == *c,
            DimensionValue::Lyricist(l) => self.lyricist == *l,
        }
    }

    /// Name credited in `role`.
    pub fn person(&self, role: Role) -> &str {
        match role {
            Role::Composer => &self.composer,
            Role::Singer => &self.singer,
            Role::Lyricist => &self.lyricist,
        }
    }

    /// Fields searched by free text, in a fixed order.
    pub(crate) fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.movie,
            &self.song,
            &self.composer,
            &self.singer,
            &self.lyricist,
        ]
    }
}

/// Filterable dimension of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Year,
    Singer,
    Composer,
    Lyricist,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Singer,
        Dimension::Composer,
        Dimension::Lyricist,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Singer => "Singer",
            Dimension::Composer => "Composer",
            Dimension::Lyricist => "Lyricist",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Dimension::Year => "Years",
            Dimension::Singer => "Singers",
            Dimension::Composer => "Composers",
            Dimension::Lyricist => "Lyricists",
        }
    }
}

/// The three credited people on a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Composer,
    Singer,
    Lyricist,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Composer, Role::Singer, Role::Lyricist];

    pub fn dimension(self) -> Dimension {
        match self {
            Role::Composer => Dimension::Composer,
            Role::Singer => Dimension::Singer,
            Role::Lyricist => Dimension::Lyricist,
        }
    }

    pub fn value(self, name: impl Into<String>) -> DimensionValue {
        match self {
            Role::Composer => DimensionValue::Composer(name.into()),
            Role::Singer => DimensionValue::Singer(name.into()),
            Role::Lyricist => DimensionValue::Lyricist(name.into()),
        }
    }
}

/// A concrete value along one dimension.
///
/// Ordering is by dimension first, then by value, so a `BTreeSet` holding one
/// dimension's values iterates them in natural order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DimensionValue {
    Year(i32),
    Singer(String),
    Composer(String),
    Lyricist(String),
}

impl DimensionValue {
    pub fn dimension(&self) -> Dimension {
        match self {
            DimensionValue::Year(_) => Dimension::Year,
            DimensionValue::Singer(_) => Dimension::Singer,
            DimensionValue::Composer(_) => Dimension::Composer,
            DimensionValue::Lyricist(_) => Dimension::Lyricist,
        }
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::Year(y) => write!(f, "{y}"),
            DimensionValue::Singer(s)
            | DimensionValue::Composer(s)
            | DimensionValue::Lyricist(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Song;

    pub(crate) fn song(
        id: u32,
        year: i32,
        singer: &str,
        composer: &str,
        lyricist: &str,
        movie: &str,
        title: &str,
    ) -> Song {
        Song {
            id,
            movie: movie.into(),
            year,
            song: title.into(),
            composer: composer.into(),
            singer: singer.into(),
            lyricist: lyricist.into(),
            audio: None,
        }
    }

    /// The three-song catalog used across the pipeline tests.
    pub(crate) fn trio() -> Vec<Song> {
        vec![
            song(1, 2010, "A", "X", "P", "M1", "S1"),
            song(2, 2010, "B", "X", "Q", "M2", "S2"),
            song(3, 2020, "A", "Y", "P", "M3", "S3"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::trio;
    use super::*;

    #[test]
    fn has_matches_exact_field_only() {
        let songs = trio();
        assert!(songs[0].has(&DimensionValue::Year(2010)));
        assert!(songs[0].has(&DimensionValue::Singer("A".into())));
        assert!(!songs[0].has(&DimensionValue::Singer("a".into())));
        assert!(!songs[0].has(&DimensionValue::Composer("A".into())));
    }

    #[test]
    fn value_round_trips_through_dimension() {
        let s = &trio()[2];
        for d in Dimension::ALL {
            let v = s.value(d);
            assert_eq!(v.dimension(), d);
            assert!(s.has(&v));
        }
    }
}
