// ABOUTME: Keyboard shortcut mapping for the player.
// ABOUTME: Explicit key-to-action table plus the fixed playback rate set.

/// Seconds skipped by the back shortcut.
pub const SKIP_BACK_SECS: f64 = 15.0;
/// Seconds skipped by the forward shortcut.
pub const SKIP_FORWARD_SECS: f64 = 30.0;

/// The playback rates the player offers. Anything else is rejected.
pub const PLAYBACK_RATES: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Actions a keyboard shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    TogglePlayPause,
    Skip(f64),
    ToggleMute,
}

/// Maps a pressed key to a player action.
///
/// Shortcuts are suppressed while focus is in a text input so typing never
/// drives the player. Unknown keys map to nothing.
pub fn action_for_key(key: &str, in_text_input: bool) -> Option<PlayerAction> {
    if in_text_input {
        return None;
    }

    match key {
        " " | "k" => Some(PlayerAction::TogglePlayPause),
        "ArrowLeft" => Some(PlayerAction::Skip(-SKIP_BACK_SECS)),
        "ArrowRight" => Some(PlayerAction::Skip(SKIP_FORWARD_SECS)),
        "m" => Some(PlayerAction::ToggleMute),
        _ => None,
    }
}

/// Whether a rate is one of the offered playback rates.
pub fn is_valid_rate(rate: f64) -> bool {
    PLAYBACK_RATES.contains(&rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key(" ", false), Some(PlayerAction::TogglePlayPause));
        assert_eq!(action_for_key("k", false), Some(PlayerAction::TogglePlayPause));
        assert_eq!(
            action_for_key("ArrowLeft", false),
            Some(PlayerAction::Skip(-15.0))
        );
        assert_eq!(
            action_for_key("ArrowRight", false),
            Some(PlayerAction::Skip(30.0))
        );
        assert_eq!(action_for_key("m", false), Some(PlayerAction::ToggleMute));
    }

    #[test]
    fn test_unknown_keys_do_nothing() {
        assert_eq!(action_for_key("q", false), None);
        assert_eq!(action_for_key("Escape", false), None);
    }

    #[test]
    fn test_suppressed_in_text_input() {
        assert_eq!(action_for_key(" ", true), None);
        assert_eq!(action_for_key("k", true), None);
        assert_eq!(action_for_key("m", true), None);
    }

    #[test]
    fn test_rate_set() {
        assert!(is_valid_rate(1.0));
        assert!(is_valid_rate(0.5));
        assert!(is_valid_rate(2.0));
        assert!(!is_valid_rate(3.0));
        assert!(!is_valid_rate(1.1));
    }
}
