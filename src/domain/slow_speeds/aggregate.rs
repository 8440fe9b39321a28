//! SlowSpeedsWorkflow - the slow-speeds diagnosis state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::notes::{Band, DiagnosticNotes};

use super::recommendation::{
    classify_advanced_circuit, classify_circuit, classify_wifi, CircuitAnalysis,
};
use super::{Advisory, DiagnosticReport, Phase, SlowSpeedsEvent};

/// The slow-speeds workflow aggregate.
///
/// Holds only the current phase and any pending advisory; everything the
/// phases learn goes straight into the shared `DiagnosticNotes`, which the
/// session owns and passes in on each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlowSpeedsWorkflow {
    phase: Phase,
    advisory: Option<Advisory>,
}

impl SlowSpeedsWorkflow {
    /// Creates a workflow at Phase 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advisory surfaced by the last transition, if any. Cleared by the
    /// next successful submission; it never blocks an advance.
    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }

    /// Compiles the diagnostic report. Only available at the report phase.
    pub fn report(&self, notes: &DiagnosticNotes) -> Option<DiagnosticReport> {
        (self.phase == Phase::Report).then(|| DiagnosticReport::compile(notes))
    }

    /// Applies a phase submission, recording facts into `notes` and
    /// returning the (possibly unchanged) phase.
    pub fn apply(&mut self, event: SlowSpeedsEvent, notes: &mut DiagnosticNotes) -> Phase {
        match (self.phase, event) {
            (Phase::Validation, SlowSpeedsEvent::SubmitValidation(sub)) => {
                // GDPR gate: nothing advances until the checks pass.
                if sub.gdpr_ok.is_no() {
                    tracing::warn!("validation submitted without GDPR clearance, ignored");
                    return self.phase;
                }
                notes.record_validation(sub.reboot_done, sub.scope);
                self.advisory = sub
                    .reboot_done
                    .is_no()
                    .then_some(Advisory::PowerCycleBothUnits);

                let next = if sub.router_isolated.is_no() {
                    // Not isolated to the router: skip circuit analysis.
                    Phase::Wifi
                } else {
                    Phase::Circuit
                };
                self.advance(next);
            }
            (Phase::Circuit, SlowSpeedsEvent::SubmitCircuit(sub)) => {
                self.advisory = None;
                match classify_circuit(&sub) {
                    CircuitAnalysis::Fault(rec) => {
                        notes.set_recommendation(rec);
                        self.advance(Phase::Report);
                    }
                    CircuitAnalysis::NeedsAdvancedAnalysis => {
                        self.advance(Phase::CircuitAdvanced);
                    }
                    CircuitAnalysis::LineHealthy => {
                        notes.record_sync_stable();
                        self.advance(Phase::Wifi);
                    }
                }
            }
            (Phase::CircuitAdvanced, SlowSpeedsEvent::SubmitAdvancedCircuit(sub)) => {
                self.advisory = None;
                match classify_advanced_circuit(&sub) {
                    CircuitAnalysis::Fault(rec) => {
                        notes.set_recommendation(rec);
                        self.advance(Phase::Report);
                    }
                    CircuitAnalysis::LineHealthy => {
                        notes.record_sync_stable();
                        self.advance(Phase::Wifi);
                    }
                    // The advanced analysis never defers again; stay put if
                    // the classifier ever claims otherwise.
                    CircuitAnalysis::NeedsAdvancedAnalysis => {
                        tracing::warn!("advanced circuit analysis cannot defer, ignored");
                    }
                }
            }
            (Phase::Wifi, SlowSpeedsEvent::SubmitWifi(sub)) => {
                self.advisory = None;
                let band = if sub.on_5ghz.is_yes() {
                    Band::FiveGhz
                } else {
                    Band::TwoPointFourGhz
                };
                // Environment answers only apply on 5GHz; anything supplied
                // off-band is discarded so the note reads N/A.
                let (same_room, los) = if sub.on_5ghz.is_yes() {
                    (sub.same_room, sub.clear_los)
                } else {
                    (None, None)
                };
                notes.record_wifi_telemetry(sub.rssi, sub.standard, band, same_room, los);
                notes.set_recommendation(classify_wifi(&sub));
                self.advance(Phase::Report);
            }
            (phase, event) => {
                tracing::warn!(?phase, ?event, "event not applicable to current phase, ignored");
            }
        }
        self.phase
    }

    fn advance(&mut self, target: Phase) {
        let next = self.phase.transition_checked(target);
        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "slow-speeds phase advanced");
            self.phase = next;
        }
    }
}
