//! Search configuration.

/// What to do when a neighbour that is already on the frontier gets a
/// better score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierPolicy {
    /// Record the new score but leave the existing frontier entry in place.
    /// The entry keeps its old, higher priority until it is popped.
    #[default]
    KeepStale,
    /// Push a second entry with the new priority and the node's original
    /// tie-break counter; outdated entries are discarded when popped.
    /// Equivalent to a decrease-key on the frontier.
    Reprioritize,
}

/// Configuration for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub policy: FrontierPolicy,
}

impl SearchConfig {
    /// Use the given frontier policy.
    pub fn with_policy(mut self, policy: FrontierPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().with_policy(FrontierPolicy::Reprioritize);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let back: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(back.policy, FrontierPolicy::KeepStale);
    }
}
