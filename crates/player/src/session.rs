// ABOUTME: The single global playback session.
// ABOUTME: Owns the transport; play/pause/seek, stale-signal guard, position checkpoints.

use callboard_feed::Episode;
use serde::Serialize;

use crate::keys::is_valid_rate;
use crate::position::{storage_key, ConsentCategory, ConsentPolicy, PositionStore};
use crate::sequence::{LoadToken, SequenceGuard};
use crate::transport::{MediaTransport, TransportEvent};

/// Derived session state for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Loading,
    Playing,
    Paused,
}

/// The one playback session for the whole application.
///
/// Owns the single media transport exclusively. Selecting a new episode
/// supersedes the previous load: transport signals carrying the old load's
/// token are ignored, so a slow first load can never clobber the episode
/// the listener picked second.
pub struct PlaybackSession<T: MediaTransport> {
    transport: T,
    store: Box<dyn PositionStore>,
    consent: Box<dyn ConsentPolicy>,
    guard: SequenceGuard,
    current_episode: Option<Episode>,
    is_playing: bool,
    is_loading: bool,
    volume: f64,
    muted: bool,
    rate: f64,
}

impl<T: MediaTransport> PlaybackSession<T> {
    pub fn new(transport: T, store: Box<dyn PositionStore>, consent: Box<dyn ConsentPolicy>) -> Self {
        Self {
            transport,
            store,
            consent,
            guard: SequenceGuard::new(),
            current_episode: None,
            is_playing: false,
            is_loading: false,
            volume: 1.0,
            muted: false,
            rate: 1.0,
        }
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn status(&self) -> SessionStatus {
        if self.current_episode.is_none() {
            SessionStatus::Idle
        } else if self.is_loading {
            SessionStatus::Loading
        } else if self.is_playing {
            SessionStatus::Playing
        } else {
            SessionStatus::Paused
        }
    }

    /// Selects an episode for playback.
    ///
    /// Selecting the episode that's already current toggles pause/resume
    /// without reloading. A different episode becomes current immediately,
    /// the session enters Loading, and the previous load (if any) is
    /// superseded. Returns the token transport events for this load must
    /// carry.
    pub fn play(&mut self, episode: Episode) -> LoadToken {
        if let Some(current) = &self.current_episode {
            if current.id == episode.id {
                if self.is_playing {
                    self.pause();
                } else {
                    self.resume();
                }
                // Same load, same token
                return self
                    .guard
                    .current()
                    .unwrap_or_else(|| self.guard.issue());
            }
        }

        let token = self.guard.issue();
        self.transport.load(&episode.audio_url);
        self.restore_position(&episode.id);
        self.current_episode = Some(episode);
        self.is_loading = true;
        self.is_playing = true;
        self.transport.play();
        token
    }

    /// Pauses playback. No-op when nothing is selected.
    pub fn pause(&mut self) {
        if self.current_episode.is_none() {
            return;
        }
        self.is_playing = false;
        self.transport.pause();
    }

    /// Resumes playback of the current episode. No-op when idle.
    pub fn resume(&mut self) {
        if self.current_episode.is_none() {
            return;
        }
        self.is_playing = true;
        self.transport.play();
    }

    /// Pauses and clears the current episode, returning to Idle.
    pub fn close(&mut self) {
        self.pause();
        self.current_episode = None;
        self.is_loading = false;
    }

    /// Applies a transport signal. Signals from a superseded load are
    /// ignored entirely.
    pub fn handle_event(&mut self, token: LoadToken, event: TransportEvent) {
        if self.guard.is_stale(token) {
            return;
        }

        match event {
            TransportEvent::LoadedMetadata | TransportEvent::CanPlay => {
                self.is_loading = false;
            }
            TransportEvent::Playing => {
                self.is_loading = false;
                self.is_playing = true;
            }
            TransportEvent::Waiting => {
                self.is_loading = true;
            }
            TransportEvent::Ended => {
                self.is_playing = false;
            }
            TransportEvent::Error => {
                self.is_playing = false;
                self.is_loading = false;
            }
        }
    }

    /// Seeks to an absolute position, clamped to the media duration.
    pub fn seek_to(&mut self, position: f64) {
        let duration = self.transport.duration();
        let clamped = if duration > 0.0 {
            position.clamp(0.0, duration)
        } else {
            position.max(0.0)
        };
        self.transport.seek(clamped);
    }

    /// Skips forward or back by a relative number of seconds.
    pub fn skip(&mut self, delta: f64) {
        let target = self.transport.position() + delta;
        self.seek_to(target);
    }

    /// Sets volume, clamped to 0..=1.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.transport.set_volume(self.volume);
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.transport.set_muted(self.muted);
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Selects a playback rate. Values outside the offered set are ignored.
    pub fn set_rate(&mut self, rate: f64) {
        if !is_valid_rate(rate) {
            return;
        }
        self.rate = rate;
        self.transport.set_rate(rate);
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Persists the current position. The host calls this on a fixed
    /// cadence while playing; nothing is written without functional
    /// consent or at position zero.
    pub fn checkpoint_position(&mut self) {
        if !self.consent.allows(ConsentCategory::Functional) {
            return;
        }
        let Some(episode) = &self.current_episode else {
            return;
        };
        let position = self.transport.position();
        if position > 0.0 {
            self.store.save(&storage_key(&episode.id), position);
        }
    }

    /// Restores a checkpointed position for a newly selected episode.
    fn restore_position(&mut self, episode_id: &str) {
        if !self.consent.allows(ConsentCategory::Functional) {
            return;
        }
        if let Some(position) = self.store.load(&storage_key(episode_id)) {
            if position > 0.0 {
                self.transport.seek(position);
            }
        }
    }
}
