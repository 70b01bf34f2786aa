//! Construction-time options for a state machine.

use crate::core::StateId;
use crate::validation::ValidationPolicy;

/// Literal state the legacy reset behaviour jumps to.
pub const LEGACY_RESET_STATE: &str = "normal";

/// Where `reset` sends the machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResetTarget {
    /// The configured initial state
    #[default]
    Initial,

    /// A fixed state, whether or not it is configured
    Fixed(StateId),
}

impl ResetTarget {
    /// Reset to the literal `"normal"` state regardless of configuration.
    pub fn legacy() -> Self {
        ResetTarget::Fixed(StateId::from(LEGACY_RESET_STATE))
    }

    pub(crate) fn resolve<'a>(&'a self, initial: &'a StateId) -> &'a StateId {
        match self {
            ResetTarget::Initial => initial,
            ResetTarget::Fixed(state) => state,
        }
    }
}

/// Options fixed when a machine is built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineOptions {
    pub reset_target: ResetTarget,
    pub validation: ValidationPolicy,
}
