// ABOUTME: Playback position persistence and the consent gate in front of it.
// ABOUTME: ConsentPolicy/PositionStore traits with in-memory implementations.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How often the host should checkpoint the playing position.
pub const CHECKPOINT_INTERVAL: Duration = Duration::from_secs(5);

/// Consent categories a visitor can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    /// Always granted; required for the site to function.
    Necessary,
    /// Convenience features like resuming playback where you left off.
    Functional,
    Analytics,
}

/// Answers whether a consent category is currently granted.
pub trait ConsentPolicy {
    fn allows(&self, category: ConsentCategory) -> bool;
}

/// A fixed consent decision, set once at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticConsent {
    granted: Vec<ConsentCategory>,
}

impl StaticConsent {
    pub fn granting(granted: Vec<ConsentCategory>) -> Self {
        Self { granted }
    }

    /// Everything granted.
    pub fn all() -> Self {
        Self::granting(vec![
            ConsentCategory::Necessary,
            ConsentCategory::Functional,
            ConsentCategory::Analytics,
        ])
    }

    /// Only the necessary category.
    pub fn necessary_only() -> Self {
        Self::granting(vec![ConsentCategory::Necessary])
    }
}

impl ConsentPolicy for StaticConsent {
    fn allows(&self, category: ConsentCategory) -> bool {
        category == ConsentCategory::Necessary || self.granted.contains(&category)
    }
}

/// The storage key for an episode's saved position.
pub fn storage_key(episode_id: &str) -> String {
    format!("episode-{episode_id}")
}

/// Keyed storage for playback positions, in seconds.
pub trait PositionStore {
    fn save(&mut self, key: &str, position: f64);
    fn load(&self, key: &str) -> Option<f64>;
    fn remove(&mut self, key: &str);
}

/// In-memory position store.
#[derive(Debug, Default, Clone)]
pub struct MemoryPositionStore {
    positions: HashMap<String, f64>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryPositionStore {
    fn save(&mut self, key: &str, position: f64) {
        self.positions.insert(key.to_string(), position);
    }

    fn load(&self, key: &str) -> Option<f64> {
        self.positions.get(key).copied()
    }

    fn remove(&mut self, key: &str) {
        self.positions.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_namespacing() {
        assert_eq!(storage_key("guid-42"), "episode-guid-42");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryPositionStore::new();
        store.save("episode-a", 12.5);
        assert_eq!(store.load("episode-a"), Some(12.5));
        assert_eq!(store.load("episode-b"), None);

        store.remove("episode-a");
        assert_eq!(store.load("episode-a"), None);
    }

    #[test]
    fn test_static_consent() {
        let consent = StaticConsent::necessary_only();
        assert!(consent.allows(ConsentCategory::Necessary));
        assert!(!consent.allows(ConsentCategory::Functional));

        let consent = StaticConsent::all();
        assert!(consent.allows(ConsentCategory::Functional));
        assert!(consent.allows(ConsentCategory::Analytics));
    }
}
