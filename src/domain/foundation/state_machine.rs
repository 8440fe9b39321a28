//! State machine trait for workflow step enums.
//!
//! Provides a consistent interface for validating and performing step
//! transitions across the troubleshooting workflows (TLOS steps,
//! slow-speeds phases).

/// Trait for step enums that represent state machines.
///
/// Implementors define which steps are reachable from which, and get a
/// checked transition method for free. Workflow aggregates route every step
/// change through `transition_checked`, so an unreachable target can never
/// be entered even if a transition rule regresses.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition if it is valid, otherwise stays put.
    ///
    /// Invalid targets are a no-op (state unchanged), logged at warn level.
    /// This matches the forgiving, agent-facing posture of the tool: bad
    /// input stalls, it never crashes.
    fn transition_checked(&self, target: Self) -> Self {
        if self.can_transition_to(&target) {
            target
        } else {
            tracing::warn!(from = ?self, to = ?target, "ignoring unreachable step transition");
            *self
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
