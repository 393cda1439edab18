//! core/mod.rs
//!
//! The brain of the dashboard. No iced imports anywhere under here.
//!
//! The pipeline is explicit and one-directional:
//!   (A) catalog -> filter criteria -> filtered songs
//!   (B) filtered songs -> aggregates (count tables, collaborations, buckets)
//!   (C) filtered songs -> playlist order
//!
//! `FilterState` is the only thing that changes criteria. `Snapshot` bundles
//! (A) and (B) for one filter revision so the views never recompute.

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod library;
pub mod playback;
pub mod playlist;
pub mod snapshot;
pub mod state;
pub mod tags;
pub mod types;

pub use catalog::{Catalog, ImportReport};
pub use error::{CatalogError, PlaybackError};
pub use filter::{FilterCriteria, filter_songs, sort_by_title};
pub use playlist::{PlaybackStatus, PlayerSignal, Playlist, RequestId, SignalOutcome};
pub use snapshot::{DisplayLimits, Snapshot, SnapshotCache};
pub use state::{FilterCommand, FilterState, ResetGeneration, ResetScoped};
pub use types::{Dimension, DimensionValue, Role, Song, SongId};
