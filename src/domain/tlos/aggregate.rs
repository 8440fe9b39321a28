//! TlosWorkflow - the TLOS troubleshooting state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RadioInput, StateMachine};

use super::{TlosEvent, TlosOutcome, TlosStep};

/// The TLOS workflow aggregate.
///
/// Holds the current step, the three-valued radio answers for the steps
/// that use them, and the terminal outcome once one is reached. While an
/// outcome is set the workflow is halted: only `Back` (from the
/// single-device outcome) applies, everything else waits for a session
/// reset.
///
/// Every event is total: an event that does not apply to the current step
/// leaves the workflow unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TlosWorkflow {
    step: TlosStep,
    cables: RadioInput,
    ont_red: RadioInput,
    circuit: RadioInput,
    router: RadioInput,
    online: RadioInput,
    outcome: Option<TlosOutcome>,
}

impl TlosWorkflow {
    /// Creates a workflow at step 1 with all radios pending.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Current step.
    pub fn step(&self) -> TlosStep {
        self.step
    }

    /// Terminal outcome, if one has been reached.
    pub fn outcome(&self) -> Option<TlosOutcome> {
        self.outcome
    }

    /// True once a terminal outcome halts the workflow.
    pub fn is_halted(&self) -> bool {
        self.outcome.is_some()
    }

    /// Step 3 cabling radio.
    pub fn cables(&self) -> RadioInput {
        self.cables
    }

    /// Step 3 optical-light radio.
    pub fn ont_red(&self) -> RadioInput {
        self.ont_red
    }

    /// Step 4 circuit RAG radio.
    pub fn circuit(&self) -> RadioInput {
        self.circuit
    }

    /// Step 4 router RAG radio.
    pub fn router(&self) -> RadioInput {
        self.router
    }

    /// Step 6 online radio.
    pub fn online(&self) -> RadioInput {
        self.online
    }

    /// Whether the advance action for the current step is currently valid.
    ///
    /// The adapter should only offer the proceed control while this holds;
    /// the corresponding event is a no-op otherwise.
    pub fn can_proceed(&self) -> bool {
        if self.is_halted() {
            return false;
        }
        match self.step {
            TlosStep::CablingCheck => self.cables.is_yes() && self.ont_red.is_no(),
            TlosStep::RagStatus => self.circuit.is_no() || self.router.is_no(),
            _ => false,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Applies an agent event, returning the (possibly unchanged) step.
    pub fn apply(&mut self, event: TlosEvent) -> TlosStep {
        if self.is_halted() {
            // Only the single-device outcome offers a way back.
            if event == TlosEvent::Back && self.outcome == Some(TlosOutcome::SingleDeviceIssue) {
                self.rewind_to_start();
            } else {
                tracing::warn!(step = ?self.step, ?event, "workflow halted, event ignored");
            }
            return self.step;
        }

        match (self.step, event) {
            (TlosStep::PowerCheck, TlosEvent::PowerOk) => {
                self.advance(TlosStep::DeviceConnectivity);
            }
            (TlosStep::PowerCheck, TlosEvent::PowerNotOk) => {
                self.halt(TlosOutcome::PowerNotConnected);
            }
            (TlosStep::DeviceConnectivity, TlosEvent::AllDevicesAffected) => {
                self.advance(TlosStep::CablingCheck);
            }
            (TlosStep::DeviceConnectivity, TlosEvent::SingleDeviceOnly) => {
                self.halt(TlosOutcome::SingleDeviceIssue);
            }
            (TlosStep::CablingCheck, TlosEvent::RecordCabling(answer)) => {
                self.cables = answer.into();
            }
            (TlosStep::CablingCheck, TlosEvent::RecordOpticalRed(answer)) => {
                self.ont_red = answer.into();
                // A red optical light is terminal regardless of cabling.
                if self.ont_red.is_yes() {
                    self.halt(TlosOutcome::RedOpticalLight);
                }
            }
            (TlosStep::CablingCheck, TlosEvent::ProceedToRagStatus) if self.can_proceed() => {
                self.advance(TlosStep::RagStatus);
            }
            (TlosStep::RagStatus, TlosEvent::RecordCircuitGreen(answer)) => {
                self.circuit = answer.into();
                self.check_rag_all_green();
            }
            (TlosStep::RagStatus, TlosEvent::RecordRouterGreen(answer)) => {
                self.router = answer.into();
                self.check_rag_all_green();
            }
            (TlosStep::RagStatus, TlosEvent::ProceedToReboot) if self.can_proceed() => {
                self.advance(TlosStep::Reboot);
            }
            (TlosStep::Reboot, TlosEvent::RebootCompleted) => {
                self.advance(TlosStep::FinalCheck);
            }
            (TlosStep::FinalCheck, TlosEvent::RecordOnline(answer)) => {
                self.online = answer.into();
                let outcome = if self.online.is_yes() {
                    TlosOutcome::ServiceRestored
                } else {
                    TlosOutcome::StillOffline
                };
                self.halt(outcome);
            }
            (step, event) => {
                tracing::warn!(?step, ?event, "event not applicable to current step, ignored");
            }
        }
        self.step
    }

    fn advance(&mut self, target: TlosStep) {
        let next = self.step.transition_checked(target);
        if next != self.step {
            tracing::debug!(from = ?self.step, to = ?next, "tlos step advanced");
            self.step = next;
        }
    }

    fn halt(&mut self, outcome: TlosOutcome) {
        tracing::debug!(step = ?self.step, ?outcome, "tlos workflow reached outcome");
        self.outcome = Some(outcome);
    }

    fn check_rag_all_green(&mut self) {
        if self.circuit.is_yes() && self.router.is_yes() {
            self.halt(TlosOutcome::ConnectionWorking);
        }
    }

    /// Back from the step-2 terminal: a rewind, not a forward transition,
    /// so it bypasses the step reachability check. TLOS records no notes,
    /// so this is a complete do-over of the workflow.
    fn rewind_to_start(&mut self) {
        *self = Self::new();
    }
}
