//! core/playlist.rs
//! The filtered list as an ordered playlist, plus transport state.
//!
//! - Presentation order: title sort, then an optional seeded shuffle.
//! - `current` is an index into that order and is always valid (or `None` when empty).
//! - Every play attempt gets a `RequestId`; player signals for older ids are dropped.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::filter::sort_by_title;
use super::types::{Song, SongId};

pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    /// Retryable: starting a new request on the same song is always allowed.
    Failed(String),
}

/// What the player reports back about a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSignal {
    Play,
    Pause,
    Ended,
    Error(String),
}

/// How `on_signal` handled a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Stale request id; nothing changed.
    Ignored,
    Updated,
    /// The song ended and `current` moved on. The caller should start playing it.
    Advanced,
}

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    songs: Vec<Song>,
    current: Option<usize>,
    shuffle_seed: Option<u64>,
    status: PlaybackStatus,
    request: RequestId,
}

impl Playlist {
    /// Replace the contents with a new filtered list.
    ///
    /// Returns true if the current song is no longer the same song; any
    /// in-flight request is then superseded and the status resets to idle.
    pub fn rebuild(&mut self, filtered: &[Song]) -> bool {
        let previous = self.current_id();

        self.songs = filtered.to_vec();
        self.reorder();

        let kept = previous.and_then(|id| self.position_of(id));
        self.current = match (kept, self.current) {
            (Some(i), _) => Some(i),
            _ if self.songs.is_empty() => None,
            (None, Some(i)) if i < self.songs.len() => Some(i),
            (None, _) => Some(0),
        };

        let changed = previous != self.current_id();
        if changed {
            self.supersede();
        }

        debug!(
            len = self.songs.len(),
            current = ?self.current,
            changed,
            "playlist rebuilt"
        );
        changed
    }

    /// Turn shuffle on with `seed`, or off if it is already on.
    /// The current song stays current.
    pub fn toggle_shuffle(&mut self, seed: u64) {
        let previous = self.current_id();

        self.shuffle_seed = match self.shuffle_seed {
            Some(_) => None,
            None => Some(seed),
        };
        self.reorder();

        if let Some(i) = previous.and_then(|id| self.position_of(id)) {
            self.current = Some(i);
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.songs.len() {
            return false;
        }
        if self.current != Some(index) {
            self.current = Some(index);
            self.supersede();
        }
        true
    }

    /// Move to the next song, wrapping to the first. No-op when empty.
    pub fn next(&mut self) -> Option<&Song> {
        let len = self.songs.len();
        if len == 0 {
            return None;
        }
        let i = self.current.map(|i| (i + 1) % len).unwrap_or(0);
        self.select(i);
        self.current()
    }

    /// Move to the previous song, wrapping to the last. No-op when empty.
    pub fn previous(&mut self) -> Option<&Song> {
        let len = self.songs.len();
        if len == 0 {
            return None;
        }
        let i = match self.current {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select(i);
        self.current()
    }

    /// Start a play attempt for the current song.
    pub fn begin_request(&mut self) -> RequestId {
        self.request += 1;
        self.status = PlaybackStatus::Loading;
        self.request
    }

    pub fn on_signal(&mut self, request: RequestId, signal: PlayerSignal) -> SignalOutcome {
        if request != self.request {
            warn!(request, live = self.request, ?signal, "stale player signal ignored");
            return SignalOutcome::Ignored;
        }

        match signal {
            PlayerSignal::Play => self.status = PlaybackStatus::Playing,
            PlayerSignal::Pause => self.status = PlaybackStatus::Paused,
            PlayerSignal::Error(message) => self.status = PlaybackStatus::Failed(message),
            PlayerSignal::Ended => {
                if self.songs.is_empty() {
                    self.status = PlaybackStatus::Idle;
                    return SignalOutcome::Updated;
                }
                let len = self.songs.len();
                let i = self.current.map(|i| (i + 1) % len).unwrap_or(0);
                self.current = Some(i);
                self.supersede();
                return SignalOutcome::Advanced;
            }
        }

        SignalOutcome::Updated
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

    pub fn current(&self) -> Option<&Song> {
        self.current.and_then(|i| self.songs.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    pub fn request(&self) -> RequestId {
        self.request
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle_seed.is_some()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.status, PlaybackStatus::Playing | PlaybackStatus::Loading)
    }

    fn current_id(&self) -> Option<SongId> {
        self.current().map(|s| s.id)
    }

    fn position_of(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    fn reorder(&mut self) {
        sort_by_title(&mut self.songs);
        if let Some(seed) = self.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            self.songs.shuffle(&mut rng);
        }
    }

    fn supersede(&mut self) {
        self.request += 1;
        self.status = PlaybackStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::fixtures::{song, trio};

    fn titles(p: &Playlist) -> Vec<&str> {
        p.songs().iter().map(|s| s.song.as_str()).collect()
    }

    #[test]
    fn rebuild_sorts_by_title_and_starts_at_first() {
        let songs = vec![
            song(1, 2000, "A", "X", "P", "M", "beta"),
            song(2, 2000, "A", "X", "P", "M", "Alpha"),
        ];
        let mut p = Playlist::default();
        p.rebuild(&songs);
        assert_eq!(titles(&p), ["Alpha", "beta"]);
        assert_eq!(p.current().map(|s| s.id), Some(2));
    }

    #[test]
    fn current_song_survives_rebuild() {
        let mut p = Playlist::default();
        p.rebuild(&trio());
        p.select(2);
        let id = p.current().map(|s| s.id);

        let changed = p.rebuild(&trio()[1..]);
        assert!(!changed);
        assert_eq!(p.current().map(|s| s.id), id);
    }

    #[test]
    fn index_clamps_when_list_shrinks() {
        let mut p = Playlist::default();
        p.rebuild(&trio());
        p.select(2);

        // Current song (S3) filtered out and index 2 is out of range.
        assert!(p.rebuild(&trio()[..2]));
        assert_eq!(p.current_index(), Some(0));
        assert_eq!(p.status(), &PlaybackStatus::Idle);
    }

    #[test]
    fn in_range_index_is_kept_when_current_song_leaves() {
        let songs: Vec<Song> = ["a", "b", "c", "d"]
            .into_iter()
            .zip(1..)
            .map(|(title, id)| song(id, 2000, "S", "C", "L", "M", title))
            .collect();

        let mut p = Playlist::default();
        p.rebuild(&songs);
        p.select(1);

        let without_b = [songs[0].clone(), songs[2].clone(), songs[3].clone()];
        assert!(p.rebuild(&without_b));
        assert_eq!(p.current_index(), Some(1));
        assert_eq!(p.current().map(|s| s.song.as_str()), Some("c"));
    }

    #[test]
    fn empty_rebuild_has_no_current() {
        let mut p = Playlist::default();
        p.rebuild(&trio());
        p.rebuild(&[]);
        assert_eq!(p.current_index(), None);
        assert!(p.current().is_none());
        assert!(p.next().is_none());
        assert!(p.previous().is_none());
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut p = Playlist::default();
        p.rebuild(&trio());

        assert_eq!(p.previous().map(|s| s.id), Some(3));
        assert_eq!(p.next().map(|s| s.id), Some(1));
        p.next();
        p.next();
        assert_eq!(p.current_index(), Some(2));
        assert_eq!(p.next().map(|s| s.id), Some(1));
    }

    #[test]
    fn stale_signals_are_ignored() {
        let mut p = Playlist::default();
        p.rebuild(&trio());

        let old = p.begin_request();
        let live = p.begin_request();

        assert_eq!(p.on_signal(old, PlayerSignal::Play), SignalOutcome::Ignored);
        assert_eq!(p.status(), &PlaybackStatus::Loading);

        assert_eq!(p.on_signal(live, PlayerSignal::Play), SignalOutcome::Updated);
        assert_eq!(p.status(), &PlaybackStatus::Playing);
    }

    #[test]
    fn selecting_another_song_supersedes_request() {
        let mut p = Playlist::default();
        p.rebuild(&trio());
        let req = p.begin_request();
        p.select(1);
        assert_eq!(p.on_signal(req, PlayerSignal::Play), SignalOutcome::Ignored);
    }

    #[test]
    fn ended_advances_and_error_is_retryable() {
        let mut p = Playlist::default();
        p.rebuild(&trio());

        let req = p.begin_request();
        assert_eq!(p.on_signal(req, PlayerSignal::Ended), SignalOutcome::Advanced);
        assert_eq!(p.current_index(), Some(1));

        let req = p.begin_request();
        p.on_signal(req, PlayerSignal::Error("no audio".into()));
        assert_eq!(p.status(), &PlaybackStatus::Failed("no audio".into()));

        let retry = p.begin_request();
        assert_eq!(p.status(), &PlaybackStatus::Loading);
        assert_eq!(p.on_signal(retry, PlayerSignal::Play), SignalOutcome::Updated);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let songs: Vec<Song> = (1..=12)
            .map(|i| song(i, 2000, "A", "X", "P", "M", &format!("t{i:02}")))
            .collect();

        let mut a = Playlist::default();
        a.rebuild(&songs);
        a.toggle_shuffle(7);

        let mut b = Playlist::default();
        b.toggle_shuffle(7);
        b.rebuild(&songs);

        assert_eq!(titles(&a), titles(&b));
        assert!(a.is_shuffled());

        a.toggle_shuffle(7);
        assert!(!a.is_shuffled());
        assert!(titles(&a).windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn shuffle_keeps_current_song() {
        let mut p = Playlist::default();
        p.rebuild(&trio());
        p.select(1);
        let id = p.current().map(|s| s.id);
        p.toggle_shuffle(42);
        assert_eq!(p.current().map(|s| s.id), id);
    }
}
