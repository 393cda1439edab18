// core/error.rs
use std::path::PathBuf;

use thiserror::Error;

use super::types::SongId;

/// Failures while building a catalog.
///
/// Filtering and aggregation never fail; only loading does.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate song id {0}")]
    DuplicateId(SongId),

    #[error("song {id}: field `{field}` is empty")]
    EmptyField { id: SongId, field: &'static str },

    #[error("no usable songs found under {0}")]
    EmptyCatalog(PathBuf),

    #[error("too many songs under {0} to number")]
    TooManySongs(PathBuf),
}

/// Failures inside the playback engine. Reported to the GUI as events.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("no local audio for this song")]
    NoAudio,
}
