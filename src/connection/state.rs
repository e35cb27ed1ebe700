//! Provider state machine

/// Provider state
///
/// A provider moves from `Uninitialized` to `Connected` at most once and
/// never goes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderState {
    /// No client has been built yet
    #[default]
    Uninitialized,

    /// A client is stored and shared by all callers
    Connected,
}

impl ProviderState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, next: ProviderState) -> bool {
        use ProviderState::*;

        matches!(
            (self, next),
            (Uninitialized, Connected) | (Uninitialized, Uninitialized) | (Connected, Connected)
        )
    }

    /// Whether a client is available
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ProviderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Connected => write!(f, "connected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        let state = ProviderState::Uninitialized;
        assert!(state.can_transition_to(ProviderState::Connected));
        assert!(ProviderState::Connected.can_transition_to(ProviderState::Connected));
    }

    #[test]
    fn test_no_way_back() {
        assert!(!ProviderState::Connected.can_transition_to(ProviderState::Uninitialized));
    }

    #[test]
    fn test_default_is_uninitialized() {
        assert_eq!(ProviderState::default(), ProviderState::Uninitialized);
        assert!(!ProviderState::default().is_connected());
    }

    #[test]
    fn test_display() {
        assert_eq!(ProviderState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(ProviderState::Connected.to_string(), "connected");
    }
}
