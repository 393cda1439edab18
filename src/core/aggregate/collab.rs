//! Collaboration records, collaboration links and per-artist profiles.
//!
//! A collaboration is the exact (composer, singer, lyricist) tuple. Same
//! composer with a different singer is a different record.

use std::collections::{BTreeSet, HashMap};

use crate::core::types::{Role, Song};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollaborationKey {
    pub composer: String,
    pub singer: String,
    pub lyricist: String,
}

impl CollaborationKey {
    pub fn of(song: &Song) -> Self {
        Self {
            composer: song.composer.clone(),
            singer: song.singer.clone(),
            lyricist: song.lyricist.clone(),
        }
    }

    pub fn person(&self, role: Role) -> &str {
        match role {
            Role::Composer => &self.composer,
            Role::Singer => &self.singer,
            Role::Lyricist => &self.lyricist,
        }
    }

    /// How many of the three roles carry the same name.
    pub fn shared_roles(&self, other: &CollaborationKey) -> u8 {
        Role::ALL
            .iter()
            .filter(|&&r| self.person(r) == other.person(r))
            .count() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationRecord {
    pub key: CollaborationKey,
    pub songs: Vec<Song>,
    pub years: BTreeSet<i32>,
    pub movies: BTreeSet<String>,
}

impl CollaborationRecord {
    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// At least one year falls inside `from..=to`.
    pub fn active_in(&self, from: i32, to: i32) -> bool {
        any_year_in(&self.years, from, to)
    }
}

fn any_year_in(years: &BTreeSet<i32>, from: i32, to: i32) -> bool {
    from <= to && years.range(from..=to).next().is_some()
}

/// Records active inside the inclusive `range`, in their original order.
/// `None` keeps everything.
pub fn records_active_in(
    records: &[CollaborationRecord],
    range: Option<(i32, i32)>,
) -> impl Iterator<Item = &CollaborationRecord> {
    records
        .iter()
        .filter(move |r| range.is_none_or(|(from, to)| r.active_in(from, to)))
}

/// Group songs by collaboration key. Records come out in first-seen order.
pub fn group_collaborations(songs: &[Song]) -> Vec<CollaborationRecord> {
    let mut slots: HashMap<CollaborationKey, usize> = HashMap::new();
    let mut records: Vec<CollaborationRecord> = Vec::new();

    for song in songs {
        let key = CollaborationKey::of(song);
        let i = match slots.get(&key) {
            Some(&i) => i,
            None => {
                slots.insert(key.clone(), records.len());
                records.push(CollaborationRecord {
                    key,
                    songs: Vec::new(),
                    years: BTreeSet::new(),
                    movies: BTreeSet::new(),
                });
                records.len() - 1
            }
        };

        let rec = &mut records[i];
        rec.songs.push(song.clone());
        rec.years.insert(song.year);
        rec.movies.insert(song.movie.clone());
    }

    records
}

/// Edge weight tier for the collaboration graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkStrength {
    /// One shared role.
    Weak,
    /// Two shared roles.
    Strong,
    /// All three roles shared.
    Exact,
}

impl LinkStrength {
    pub fn from_shared(shared: u8) -> Option<Self> {
        match shared {
            1 => Some(LinkStrength::Weak),
            2 => Some(LinkStrength::Strong),
            3 => Some(LinkStrength::Exact),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkStrength::Weak => "weak",
            LinkStrength::Strong => "strong",
            LinkStrength::Exact => "exact",
        }
    }
}

/// Undirected link between two records, by index into the record slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollaborationLink {
    pub source: usize,
    pub target: usize,
    pub shared: u8,
    pub strength: LinkStrength,
}

/// Every unordered pair of records sharing at least one role value.
///
/// Records are unique by key, so `Exact` only shows up if the caller passes
/// records built from different song sets.
pub fn link_collaborations(records: &[CollaborationRecord]) -> Vec<CollaborationLink> {
    let mut links = Vec::new();

    for (i, a) in records.iter().enumerate() {
        for (j, b) in records.iter().enumerate().skip(i + 1) {
            let shared = a.key.shared_roles(&b.key);
            if let Some(strength) = LinkStrength::from_shared(shared) {
                links.push(CollaborationLink {
                    source: i,
                    target: j,
                    shared,
                    strength,
                });
            }
        }
    }

    links
}

/// One person's footprint in a role (bubble/pack views).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    pub name: String,
    pub role: Role,
    pub total_songs: usize,
    pub active_years: BTreeSet<i32>,
    pub composers: BTreeSet<String>,
    pub singers: BTreeSet<String>,
    pub lyricists: BTreeSet<String>,
}

impl ArtistProfile {
    /// Distinct people worked with across all roles, excluding the artist.
    pub fn collaborator_count(&self) -> usize {
        (self.composers.len() + self.singers.len() + self.lyricists.len()).saturating_sub(1)
    }

    pub fn active_in(&self, from: i32, to: i32) -> bool {
        any_year_in(&self.active_years, from, to)
    }
}

/// Profiles for everyone credited in `role`, first-seen order.
pub fn artist_profiles(songs: &[Song], role: Role) -> Vec<ArtistProfile> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<ArtistProfile> = Vec::new();

    for song in songs {
        let name = song.person(role);
        let i = *slots.entry(name).or_insert_with(|| {
            out.push(ArtistProfile {
                name: name.to_string(),
                role,
                total_songs: 0,
                active_years: BTreeSet::new(),
                composers: BTreeSet::new(),
                singers: BTreeSet::new(),
                lyricists: BTreeSet::new(),
            });
            out.len() - 1
        });

        let p = &mut out[i];
        p.total_songs += 1;
        p.active_years.insert(song.year);
        p.composers.insert(song.composer.clone());
        p.singers.insert(song.singer.clone());
        p.lyricists.insert(song.lyricist.clone());
    }

    out
}
