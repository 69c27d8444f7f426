// ABOUTME: Media transport seam between the session and the actual audio backend.
// ABOUTME: One trait mirroring a single media element, plus its event signals.

/// The one audio backend a session drives. Implementations wrap whatever
/// actually plays sound (a media element, a native decoder, a test fake);
/// the session owns exactly one and never swaps it.
pub trait MediaTransport {
    /// Points the transport at a new audio URL. Playback state resets;
    /// readiness is reported asynchronously via events.
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    /// Seeks to an absolute position in seconds.
    fn seek(&mut self, position: f64);
    /// Sets volume; callers pass values already clamped to 0..=1.
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn set_rate(&mut self, rate: f64);
    /// Current position in seconds.
    fn position(&self) -> f64;
    /// Total duration in seconds, 0 when unknown.
    fn duration(&self) -> f64;
}

/// Signals the transport reports back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// Metadata (duration) became available.
    LoadedMetadata,
    /// Enough data buffered to begin playback.
    CanPlay,
    /// Playback actually started.
    Playing,
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback reached the end of the media.
    Ended,
    /// The transport failed to load or decode the media.
    Error,
}
