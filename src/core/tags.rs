//! core/tags.rs
//! Read ID3 tags from an MP3 into a catalog `Song`.
//!
//! - Tag reading does NOT assign identity; the catalog import numbers songs.
//! - A file missing any credited field is skipped, not half-imported.

use std::path::PathBuf;

use id3::frame::Content;
use id3::{Tag, TagLike};

use super::types::Song;

/// Why a file didn't make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSkip {
    Unreadable(String),
    Missing(&'static str),
}

/// Tag frame -> song field. Order is the order fields get reported as missing.
const FRAMES: [(&str, &str); 5] = [
    ("TIT2", "song"),
    ("TALB", "movie"),
    ("TPE1", "singer"),
    ("TCOM", "composer"),
    ("TEXT", "lyricist"),
];

pub fn read_song(path: PathBuf) -> Result<Song, TagSkip> {
    let tag = Tag::read_from_path(&path).map_err(|e| TagSkip::Unreadable(e.to_string()))?;
    song_from_tag(path, &tag)
}

fn song_from_tag(path: PathBuf, tag: &Tag) -> Result<Song, TagSkip> {
    let mut fields: [String; 5] = Default::default();
    for (slot, (frame, name)) in fields.iter_mut().zip(FRAMES) {
        *slot = text_frame(tag, frame).ok_or(TagSkip::Missing(name))?;
    }

    let year = tag
        .year()
        .or_else(|| tag.date_recorded().map(|d| d.year))
        .ok_or(TagSkip::Missing("year"))?;

    let [song, movie, singer, composer, lyricist] = fields;

    Ok(Song {
        id: 0,
        movie,
        year,
        song,
        composer,
        singer,
        lyricist,
        audio: Some(path),
    })
}

/// Trimmed, non-empty text content of a frame.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    let text = match frame.content() {
        Content::Text(s) => s.trim(),
        _ => return None,
    };
    (!text.is_empty()).then(|| text.to_string())
}
