//! gui/update/playback.rs
//! GUI <-> playback engine bridge.
//!
//! - The playlist owns `current` and the status; the engine only plays paths.
//! - Every play gets a fresh request id; engine events carry it back and the
//!   playlist drops anything from an older request.
//! - GUI never touches rodio directly. Engine IO is driven by TickPlayback polling.

use iced::Task;
use tracing::{debug, info, warn};

use thedal::core::playback::{PlayerCommand, PlayerEvent, start_playback};
use thedal::core::{PlaybackError, PlaybackStatus, PlayerSignal, SignalOutcome};

use super::super::state::{Message, Thedal};

fn ensure_engine(state: &mut Thedal) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    let (controller, events) = start_playback();
    controller.send(PlayerCommand::SetVolume(state.volume));
    info!("playback engine started");

    state.playback = Some(controller);
    state.playback_events = Some(std::cell::RefCell::new(events));
}

pub(crate) fn drain_events(state: &mut Thedal) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    let tasks: Vec<Task<Message>> = drained
        .into_iter()
        .map(|ev| handle_event(state, ev))
        .collect();

    Task::batch(tasks)
}

pub(crate) fn handle_event(state: &mut Thedal, event: PlayerEvent) -> Task<Message> {
    let live = state.playlist.request();

    match &event {
        PlayerEvent::Started {
            request,
            duration_ms,
        } if *request == live => {
            state.duration_ms = *duration_ms;
            state.position_ms = 0;
        }
        PlayerEvent::Position {
            request,
            position_ms,
        } if *request == live => {
            state.position_ms = *position_ms;
        }
        PlayerEvent::Failed {
            request: None,
            message,
        } => {
            // Engine never came up. Drop it so the next play retries the output.
            warn!(error = %message, "playback engine unavailable");
            state.playback = None;
            state.playback_events = None;
            if state.playlist.status() == &PlaybackStatus::Loading {
                state
                    .playlist
                    .on_signal(live, PlayerSignal::Error(message.clone()));
            }
            state.status = format!("Playback error: {message}");
        }
        _ => {}
    }

    let Some((request, signal)) = event.signal() else {
        return Task::none();
    };

    if let PlayerSignal::Error(message) = &signal {
        if request == live {
            state.status = format!("Playback error: {message}");
        }
    }

    match state.playlist.on_signal(request, signal) {
        SignalOutcome::Advanced => play_current(state),
        SignalOutcome::Ignored | SignalOutcome::Updated => Task::none(),
    }
}

/// Start (or retry) the playlist's current song.
pub(crate) fn play_current(state: &mut Thedal) -> Task<Message> {
    let Some(song) = state.playlist.current().cloned() else {
        state.status = "Nothing to play.".into();
        return Task::none();
    };

    let request = state.playlist.begin_request();
    state.position_ms = 0;
    state.duration_ms = None;

    let Some(path) = song.audio else {
        // Same observable outcome as a failed lookup: retryable error state.
        let err = PlaybackError::NoAudio;
        state
            .playlist
            .on_signal(request, PlayerSignal::Error(err.to_string()));
        state.status = format!("{}: {err}", song.song);
        return Task::none();
    };

    ensure_engine(state);

    let Some(controller) = &state.playback else {
        state.status = "Playback engine failed to initialize.".into();
        return Task::none();
    };

    debug!(request, id = song.id, path = %path.display(), "play");
    controller.send(PlayerCommand::Play { request, path });
    state.status = format!("Loading: {}", song.song);

    Task::none()
}

pub(crate) fn play_index(state: &mut Thedal, index: usize) -> Task<Message> {
    if !state.playlist.select(index) {
        return Task::none();
    }
    play_current(state)
}

pub(crate) fn toggle_play_pause(state: &mut Thedal) -> Task<Message> {
    match state.playlist.status().clone() {
        PlaybackStatus::Playing => send(state, PlayerCommand::Pause),
        PlaybackStatus::Paused => send(state, PlayerCommand::Resume),
        PlaybackStatus::Loading => Task::none(),
        PlaybackStatus::Idle | PlaybackStatus::Failed(_) => play_current(state),
    }
}

pub(crate) fn next(state: &mut Thedal) -> Task<Message> {
    let was_playing = state.playlist.is_playing();
    if state.playlist.next().is_none() {
        return Task::none();
    }
    follow(state, was_playing)
}

pub(crate) fn prev(state: &mut Thedal) -> Task<Message> {
    let was_playing = state.playlist.is_playing();
    if state.playlist.previous().is_none() {
        return Task::none();
    }
    follow(state, was_playing)
}

/// After moving `current`: keep playing if we were, otherwise go quiet.
fn follow(state: &mut Thedal, was_playing: bool) -> Task<Message> {
    if was_playing {
        play_current(state)
    } else {
        stop_if_current_changed(state, true);
        Task::none()
    }
}

pub(crate) fn toggle_shuffle(state: &mut Thedal) -> Task<Message> {
    state.playlist.toggle_shuffle(state.shuffle_seed);
    if state.playlist.is_shuffled() {
        // Next time shuffle goes on, a different (still reproducible) order.
        state.shuffle_seed = state.shuffle_seed.wrapping_add(1);
    }
    Task::none()
}

pub(crate) fn set_volume(state: &mut Thedal, volume: f32) -> Task<Message> {
    let volume = volume.clamp(0.0, 1.0);
    state.volume = volume;

    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::SetVolume(volume));
    }

    Task::none()
}

/// The playlist moved to a different song without playing it.
pub(crate) fn stop_if_current_changed(state: &mut Thedal, changed: bool) {
    if !changed {
        return;
    }
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }
    state.position_ms = 0;
    state.duration_ms = None;
}

fn send(state: &mut Thedal, cmd: PlayerCommand) -> Task<Message> {
    match &state.playback {
        Some(controller) => controller.send(cmd),
        None => state.status = "Playback engine not running.".into(),
    }
    Task::none()
}
