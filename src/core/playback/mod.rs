//! core/playback/mod.rs
//! Local audio playback collaborator.
//!
//! The engine runs on its own thread and owns the rodio output. The GUI talks
//! to it through `PlaybackController` and polls `PlayerEvent`s on a tick.
//! Events that belong to a play request carry its `RequestId`.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::error;

use super::playlist::{PlayerSignal, RequestId};

mod engine;

pub use engine::PlaybackEngine;

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Play { request: RequestId, path: PathBuf },
    Pause,
    Resume,
    Stop,
    SetVolume(f32), // 0.0..=1.0
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started {
        request: RequestId,
        duration_ms: Option<u64>,
    },
    Paused {
        request: RequestId,
    },
    Resumed {
        request: RequestId,
    },
    Stopped,
    Position {
        request: RequestId,
        position_ms: u64,
    },
    Ended {
        request: RequestId,
    },
    Failed {
        request: Option<RequestId>,
        message: String,
    },
}

impl PlayerEvent {
    /// The playlist-level signal for this event, if it has one.
    pub fn signal(&self) -> Option<(RequestId, PlayerSignal)> {
        match self {
            PlayerEvent::Started { request, .. } | PlayerEvent::Resumed { request } => {
                Some((*request, PlayerSignal::Play))
            }
            PlayerEvent::Paused { request } => Some((*request, PlayerSignal::Pause)),
            PlayerEvent::Ended { request } => Some((*request, PlayerSignal::Ended)),
            PlayerEvent::Failed {
                request: Some(request),
                message,
            } => Some((*request, PlayerSignal::Error(message.clone()))),
            PlayerEvent::Failed { request: None, .. }
            | PlayerEvent::Stopped
            | PlayerEvent::Position { .. } => None,
        }
    }
}

/// Spawns the playback thread and returns:
/// - PlaybackController (kept in GUI state)
/// - Receiver<PlayerEvent> (drained by the GUI tick)
pub fn start_playback() -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone()) {
            Ok(e) => e,
            Err(e) => {
                error!(error = %e, "playback engine failed to start");
                let _ = event_tx.send(PlayerEvent::Failed {
                    request: None,
                    message: e.to_string(),
                });
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_map_to_playlist_signals() {
        let started = PlayerEvent::Started {
            request: 4,
            duration_ms: None,
        };
        assert_eq!(started.signal(), Some((4, PlayerSignal::Play)));

        let failed = PlayerEvent::Failed {
            request: Some(5),
            message: "decode failed".into(),
        };
        assert_eq!(
            failed.signal(),
            Some((5, PlayerSignal::Error("decode failed".into())))
        );

        assert_eq!(PlayerEvent::Stopped.signal(), None);
        assert_eq!(
            PlayerEvent::Position {
                request: 1,
                position_ms: 10
            }
            .signal(),
            None
        );
    }
}
