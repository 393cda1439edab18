//! core/catalog.rs
//!
//! The immutable song list for a session, from one of three sources:
//! - the built-in catalog compiled into the binary
//! - a TOML catalog file (`[[song]]` tables)
//! - a folder of tagged MP3s (ID3 import, ids assigned in path order)
//!
//! Every source goes through the same validation: unique ids, no empty fields.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::aggregate::distinct_values;
use super::error::CatalogError;
use super::library;
use super::tags::{self, TagSkip};
use super::types::{Dimension, DimensionValue, Song, SongId};

const BUILTIN: &str = include_str!("../../data/songs.toml");

/// Every constructed catalog gets a fresh revision (snapshot cache key).
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Arc<[Song]>,
    revision: u64,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "song", default)]
    songs: Vec<Song>,
}

/// Result of a folder import.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub catalog: Catalog,
    pub files: usize,
    pub skipped: usize,
}

impl Catalog {
    pub fn from_songs(songs: Vec<Song>) -> Result<Self, CatalogError> {
        validate(&songs)?;
        Ok(Self {
            songs: songs.into(),
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_songs(file.songs)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&text)?;
        info!(path = %path.display(), songs = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    pub fn empty() -> Self {
        Self {
            songs: Arc::from(Vec::new()),
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN)
    }

    /// Walk `root` for MP3s and build songs from their tags.
    ///
    /// Files with unreadable or incomplete tags are skipped and counted.
    pub fn import_folder(root: &Path) -> Result<ImportReport, CatalogError> {
        let paths = library::scan_mp3s(root)?;
        let files = paths.len();

        let mut songs = Vec::with_capacity(files);
        let mut skipped = 0usize;

        for path in paths {
            let shown = path.display().to_string();
            match tags::read_song(path) {
                Ok(mut song) => {
                    song.id = import_id(songs.len())
                        .ok_or_else(|| CatalogError::TooManySongs(root.to_path_buf()))?;
                    songs.push(song);
                }
                Err(TagSkip::Unreadable(e)) => {
                    warn!(path = %shown, error = %e, "unreadable tag, skipping");
                    skipped += 1;
                }
                Err(TagSkip::Missing(field)) => {
                    debug!(path = %shown, field, "incomplete tag, skipping");
                    skipped += 1;
                }
            }
        }

        if songs.is_empty() {
            return Err(CatalogError::EmptyCatalog(root.to_path_buf()));
        }

        info!(root = %root.display(), files, imported = songs.len(), skipped, "folder imported");

        Ok(ImportReport {
            catalog: Self::from_songs(songs)?,
            files,
            skipped,
        })
    }

    /// Load whatever `path` points at: a folder (tag import) or a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if path.is_dir() {
            Self::import_folder(path).map(|report| report.catalog)
        } else {
            Self::from_toml_file(path)
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Sorted distinct values for a facet's button list.
    pub fn facet_values(&self, dimension: Dimension) -> Vec<DimensionValue> {
        distinct_values(&self.songs, dimension)
    }
}

/// Id for the `index`th imported song (ids start at 1).
fn import_id(index: usize) -> Option<SongId> {
    index.checked_add(1).and_then(|n| SongId::try_from(n).ok())
}

fn validate(songs: &[Song]) -> Result<(), CatalogError> {
    let mut seen: HashSet<SongId> = HashSet::with_capacity(songs.len());

    for s in songs {
        if !seen.insert(s.id) {
            return Err(CatalogError::DuplicateId(s.id));
        }

        let fields = [
            ("movie", &s.movie),
            ("song", &s.song),
            ("composer", &s.composer),
            ("singer", &s.singer),
            ("lyricist", &s.lyricist),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CatalogError::EmptyField { id: s.id, field });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::fixtures::{song, trio};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("builtin parses");
        assert!(catalog.len() >= 20);
        assert!(catalog.songs().iter().all(|s| s.audio.is_none()));
        assert!(!catalog.facet_values(Dimension::Year).is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut songs = trio();
        songs[2].id = 1;
        assert!(matches!(
            Catalog::from_songs(songs),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let songs = vec![song(7, 2000, "S", " ", "L", "M", "T")];
        assert!(matches!(
            Catalog::from_songs(songs),
            Err(CatalogError::EmptyField {
                id: 7,
                field: "composer"
            })
        ));
    }

    #[test]
    fn toml_catalog_parses() {
        let text = r#"
            [[song]]
            id = 4
            movie = "127 Hours"
            year = 2010
            song = "If I Rise"
            composer = "A.R. Rahman"
            singer = "Dido"
            lyricist = "Rollo Armstrong"
        "#;
        let catalog = Catalog::from_toml_str(text).expect("parses");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(4).map(|s| s.year), Some(2010));
        assert_eq!(catalog.get(4).and_then(|s| s.audio.as_ref()), None);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            Catalog::from_toml_str("[[song]]\nid = \"one\""),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("songs.toml");
        std::fs::write(
            &path,
            "[[song]]\nid = 1\nmovie = \"M\"\nyear = 1999\nsong = \"S\"\ncomposer = \"C\"\nsinger = \"Si\"\nlyricist = \"L\"\n",
        )
        .expect("write");

        let catalog = Catalog::load(&path).expect("loads");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn folder_without_usable_tags_is_empty_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("silence.mp3"), b"not really an mp3").expect("write");

        assert!(matches!(
            Catalog::import_folder(dir.path()),
            Err(CatalogError::EmptyCatalog(_))
        ));
    }

    fn write_tagged(path: &Path, title: &str, lyricist: Option<&str>) {
        use id3::{Frame, Tag, TagLike, Version};

        std::fs::write(path, b"").expect("create");
        let mut tag = Tag::new();
        tag.set_title(title);
        tag.set_album("Roja");
        tag.set_artist("S. P. Balasubrahmanyam");
        tag.set_year(1992);
        tag.add_frame(Frame::text("TCOM", "A.R. Rahman"));
        if let Some(lyricist) = lyricist {
            tag.add_frame(Frame::text("TEXT", lyricist));
        }
        tag.write_to_path(path, Version::Id3v23).expect("write tag");
    }

    #[test]
    fn folder_import_numbers_songs_in_path_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("a.mp3");
        write_tagged(&first, "Kadhal Rojave", Some("Vairamuthu"));
        write_tagged(&dir.path().join("b.mp3"), "Untitled", None);
        let nested = dir.path().join("disc2");
        std::fs::create_dir(&nested).expect("mkdir");
        let third = nested.join("c.mp3");
        write_tagged(&third, "Chinna Chinna Aasai", Some("Vairamuthu"));

        let report = Catalog::import_folder(dir.path()).expect("imports");
        assert_eq!(report.files, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.catalog.len(), 2);

        let song = report.catalog.get(1).expect("first song");
        assert_eq!(song.song, "Kadhal Rojave");
        assert_eq!(song.lyricist, "Vairamuthu");
        assert_eq!(song.year, 1992);
        assert_eq!(song.audio.as_deref(), Some(first.as_path()));

        let song = report.catalog.get(2).expect("second song");
        assert_eq!(song.song, "Chinna Chinna Aasai");
        assert_eq!(song.audio.as_deref(), Some(third.as_path()));
    }

    #[test]
    fn import_ids_refuse_to_wrap() {
        assert_eq!(import_id(0), Some(1));
        assert_eq!(import_id(SongId::MAX as usize - 1), Some(SongId::MAX));
        assert_eq!(import_id(SongId::MAX as usize), None);
        assert_eq!(import_id(usize::MAX), None);
    }

    #[test]
    fn each_catalog_gets_its_own_revision() {
        let a = Catalog::from_songs(trio()).expect("valid");
        let b = Catalog::from_songs(trio()).expect("valid");
        assert_ne!(a.revision(), b.revision());
    }
}
