// ABOUTME: Playback session library for callboard.
// ABOUTME: Single-transport session state machine, position persistence, and key mapping.

pub mod keys;
pub mod position;
pub mod sequence;
pub mod session;
pub mod transport;

pub use keys::{action_for_key, PlayerAction, PLAYBACK_RATES, SKIP_BACK_SECS, SKIP_FORWARD_SECS};
pub use position::{
    storage_key, ConsentCategory, ConsentPolicy, MemoryPositionStore, PositionStore,
    StaticConsent, CHECKPOINT_INTERVAL,
};
pub use sequence::{LoadToken, SequenceGuard};
pub use session::{PlaybackSession, SessionStatus};
pub use transport::{MediaTransport, TransportEvent};
