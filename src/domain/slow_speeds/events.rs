//! Slow-speeds workflow events and submission shapes.
//!
//! Each phase submits one form; the submission structs are the exact input
//! surface the presentation adapter supplies.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Answer, Rssi, WifiStandard};
use crate::domain::notes::ImpactScope;

/// Phase 1 form: GDPR gate, power-cycle and scope questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSubmission {
    /// GDPR checks passed. `No` blocks the whole workflow.
    pub gdpr_ok: Answer,
    /// Router AND ONT recently power cycled.
    pub reboot_done: Answer,
    /// One device or the whole LAN affected.
    pub scope: ImpactScope,
    /// Slow speed isolated to the router (SDG). `No` skips circuit analysis.
    pub router_isolated: Answer,
}

/// Phase 2 form: FTTP physical and circuit checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitSubmission {
    /// ONT light status OK (no red).
    pub ont_light_ok: Answer,
    /// Cables undamaged.
    pub cables_undamaged: Answer,
    /// Cables securely plugged in. Collected for the record; the branch
    /// decision deliberately does not read it (known inert input).
    pub cables_plugged: Answer,
    /// Circuit and Router both green in M1.
    pub m1_rag_green: Answer,
    /// Speed test result green.
    pub speed_test_green: Answer,
}

/// Phase 2.5 form: advanced circuit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedCircuitSubmission {
    /// Plan and speed profile match in M1.
    pub plan_matches_profile: Answer,
    /// Speed-tests graph is consistent over time.
    pub trend_consistent: Answer,
}

/// Phase 3 form: WiFi and device telemetry.
///
/// `same_room` and `clear_los` are only asked when the device is on 5GHz;
/// the adapter sends `None` otherwise and the report renders "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSubmission {
    /// Device signal from Mosaic.
    pub rssi: Rssi,
    /// Device connected on the 5GHz band.
    pub on_5ghz: Answer,
    /// Router in a cupboard, behind a TV, or on the floor.
    pub enclosed_placement: Answer,
    /// Customer reports gaming lag. Collected for the record only (known
    /// inert input).
    pub gaming_lag: Answer,
    /// Other high-load users active.
    pub high_load_users: Answer,
    /// Negotiated WiFi standard.
    pub standard: WifiStandard,
    /// Customer in the same room as the router (5GHz only).
    pub same_room: Option<Answer>,
    /// Clear line of sight, no walls or mirrors (5GHz only).
    pub clear_los: Option<Answer>,
}

/// Everything the presentation adapter can feed into the slow-speeds
/// workflow. One submission per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlowSpeedsEvent {
    SubmitValidation(ValidationSubmission),
    SubmitCircuit(CircuitSubmission),
    SubmitAdvancedCircuit(AdvancedCircuitSubmission),
    SubmitWifi(WifiSubmission),
}

/// Non-blocking guidance surfaced by a transition for the adapter to
/// render once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Phase 1 found no recent power cycle.
    PowerCycleBothUnits,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Advisory::PowerCycleBothUnits => {
                "ACTION: Ask customer to power cycle BOTH ONT and Router now."
            }
        };
        write!(f, "{}", s)
    }
}
