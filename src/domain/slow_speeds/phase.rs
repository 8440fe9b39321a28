//! Slow-speeds workflow phases.
//!
//! The advanced circuit phase sits between circuit analysis and WiFi
//! telemetry; it is a named phase in the ordered sequence, reached only
//! when a speed test fails on an otherwise healthy line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The phases of the slow-speeds troubleshooter, in diagnosis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// GDPR gate, power-cycle and scope questions.
    #[default]
    Validation,
    /// FTTP physical and circuit checks.
    Circuit,
    /// Advanced circuit analysis (plan match, speed-test trend).
    CircuitAdvanced,
    /// WiFi and device telemetry.
    Wifi,
    /// Read-only diagnostic results.
    Report,
}

impl Phase {
    /// Canonical diagnosis order. Branch rules may skip phases but never
    /// move against this order.
    pub const ORDER: [Phase; 5] = [
        Phase::Validation,
        Phase::Circuit,
        Phase::CircuitAdvanced,
        Phase::Wifi,
        Phase::Report,
    ];

    /// Phase heading for the adapter to render.
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Validation => "Phase 1: Validation & Initial Remediation",
            Phase::Circuit => "Phase 2: FTTP Physical & Circuit",
            Phase::CircuitAdvanced => "Phase 2.5: Advanced Circuit Analysis",
            Phase::Wifi => "Phase 3: WiFi & Device Telemetry",
            Phase::Report => "Diagnostic Results",
        }
    }

    /// Returns the 0-based index of a phase in the sequence.
    pub fn order_index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|p| p == self)
            .expect("all Phase variants are in ORDER")
    }

    /// Returns true if `self` comes before `other` in diagnosis order.
    pub fn is_before(&self, other: &Phase) -> bool {
        self.order_index() < other.order_index()
    }
}

impl StateMachine for Phase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            // Validation either continues the FTTP flow or, when the fault
            // is not isolated to the router, jumps straight to WiFi.
            (Validation, Circuit)
                | (Validation, Wifi)
                // Circuit analysis can fault out to the report, defer to the
                // advanced analysis, or clear the line for WiFi diagnosis.
                | (Circuit, CircuitAdvanced)
                | (Circuit, Wifi)
                | (Circuit, Report)
                | (CircuitAdvanced, Wifi)
                | (CircuitAdvanced, Report)
                | (Wifi, Report)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Phase::*;
        match self {
            Validation => vec![Circuit, Wifi],
            Circuit => vec![CircuitAdvanced, Wifi, Report],
            CircuitAdvanced => vec![Wifi, Report],
            Wifi => vec![Report],
            Report => vec![],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_validation() {
        assert_eq!(Phase::default(), Phase::Validation);
    }

    #[test]
    fn order_covers_all_phases() {
        assert_eq!(Phase::ORDER.len(), 5);
        assert_eq!(Phase::Validation.order_index(), 0);
        assert_eq!(Phase::CircuitAdvanced.order_index(), 2);
        assert_eq!(Phase::Report.order_index(), 4);
    }

    #[test]
    fn validation_can_skip_to_wifi() {
        assert!(Phase::Validation.can_transition_to(&Phase::Wifi));
    }

    #[test]
    fn circuit_can_fault_straight_to_report() {
        assert!(Phase::Circuit.can_transition_to(&Phase::Report));
    }

    #[test]
    fn transitions_never_move_backwards() {
        for phase in Phase::ORDER {
            for target in phase.valid_transitions() {
                assert!(
                    phase.is_before(&target),
                    "{:?} -> {:?} moves against diagnosis order",
                    phase,
                    target
                );
            }
        }
    }

    #[test]
    fn report_is_terminal() {
        assert!(Phase::Report.is_terminal());
        assert!(!Phase::Wifi.is_terminal());
    }

    #[test]
    fn advanced_phase_is_named_not_fractional() {
        assert_eq!(
            Phase::CircuitAdvanced.title(),
            "Phase 2.5: Advanced Circuit Analysis"
        );
        assert_eq!(
            serde_json::to_string(&Phase::CircuitAdvanced).unwrap(),
            "\"circuit_advanced\""
        );
    }
}
