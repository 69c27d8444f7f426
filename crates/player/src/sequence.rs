// ABOUTME: Monotonic request-sequence guard.
// ABOUTME: Lets the newest in-flight operation win; completions from older ones are stale.

/// An opaque token identifying one issued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(u64);

/// Issues monotonically increasing tokens and answers whether a token is
/// still current. Used for media load signals and for search-result races:
/// the last-issued request wins, completions carrying an older token are
/// dropped.
#[derive(Debug, Default, Clone)]
pub struct SequenceGuard {
    current: u64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, making every previously issued token stale.
    pub fn issue(&mut self) -> LoadToken {
        self.current += 1;
        LoadToken(self.current)
    }

    /// The most recently issued token, if any.
    pub fn current(&self) -> Option<LoadToken> {
        (self.current > 0).then_some(LoadToken(self.current))
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.current
    }

    pub fn is_stale(&self, token: LoadToken) -> bool {
        !self.is_current(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_invalidates_older() {
        let mut guard = SequenceGuard::new();
        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(guard.is_stale(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_no_token_issued_yet() {
        let guard = SequenceGuard::new();
        assert!(guard.current().is_none());
    }

    #[test]
    fn test_current_matches_last_issue() {
        let mut guard = SequenceGuard::new();
        let token = guard.issue();
        assert_eq!(guard.current(), Some(token));
    }
}
