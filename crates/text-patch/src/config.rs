//! Construction-time configuration for [`Patch`](crate::Patch).

/// Options accepted by [`Patch::with_config`](crate::Patch::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchConfig {
    /// Seed recorded for replaying a session.
    ///
    /// The hunk store is a flat ordered vector, so the seed never changes reported changes or
    /// translated positions.
    pub seed: u64,
    /// Check structural invariants after every splice (debug builds only).
    pub validate_after_splice: bool,
}

impl PatchConfig {
    /// Create a config with the given seed and default options.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Enable or disable invariant checks after each splice.
    pub fn validate_after_splice(mut self, enabled: bool) -> Self {
        self.validate_after_splice = enabled;
        self
    }
}
