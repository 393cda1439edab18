//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per current request)
//! - command loop + periodic position ticks
//!
//! No iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, info, warn};

use super::{PlayerCommand, PlayerEvent};
use crate::core::error::PlaybackError;
use crate::core::playlist::RequestId;

const TICK_MS: u64 = 200;

pub struct PlaybackEngine {
    // Dropping this silences every sink.
    stream: OutputStream,

    sink: Option<Sink>,
    request: Option<RequestId>,
    volume: f32,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>) -> Result<Self, PlaybackError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Output(e.to_string()))?;

        info!("audio output opened");

        Ok(Self {
            stream,
            sink: None,
            request: None,
            volume: 1.0,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            self.stop_internal();
                            return;
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
        debug!("playback engine stopped");
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Returns true on shutdown.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Play { request, path } => {
                if let Err(e) = self.play_file(request, path) {
                    warn!(request, error = %e, "play request failed");
                    self.emit(PlayerEvent::Failed {
                        request: Some(request),
                        message: e.to_string(),
                    });
                }
            }
            PlayerCommand::Pause => {
                if let (Some(sink), Some(request)) = (&self.sink, self.request) {
                    sink.pause();
                    self.emit(PlayerEvent::Paused { request });
                }
            }
            PlayerCommand::Resume => {
                if let (Some(sink), Some(request)) = (&self.sink, self.request) {
                    sink.play();
                    self.emit(PlayerEvent::Resumed { request });
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                self.emit(PlayerEvent::Stopped);
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let (Some(sink), Some(request)) = (&self.sink, self.request) else {
            return;
        };

        if sink.empty() {
            self.emit(PlayerEvent::Ended { request });
            self.stop_internal();
            return;
        }

        let position_ms = sink.get_pos().as_millis() as u64;
        self.emit(PlayerEvent::Position {
            request,
            position_ms,
        });
    }

    fn play_file(&mut self, request: RequestId, path: PathBuf) -> Result<(), PlaybackError> {
        self.stop_internal();

        let file = File::open(&path).map_err(|source| PlaybackError::Open {
            path: path.clone(),
            source,
        })?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| PlaybackError::Decode(e.to_string()))?;
        let duration_ms = decoder.total_duration().map(|d| d.as_millis() as u64);

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(decoder);
        sink.play();

        self.sink = Some(sink);
        self.request = Some(request);

        debug!(request, path = %path.display(), ?duration_ms, "playback started");
        self.emit(PlayerEvent::Started {
            request,
            duration_ms,
        });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.request = None;
    }
}
