//! TLOS workflow events and terminal outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Answer;

/// Everything the presentation adapter can feed into the TLOS workflow.
///
/// `Record*` events capture a radio answer; `ProceedTo*` events are the
/// advance buttons, which are only valid while their precondition holds
/// (see `TlosWorkflow::can_proceed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlosEvent {
    /// Step 1: power to the ONT confirmed.
    PowerOk,
    /// Step 1: no power at the ONT.
    PowerNotOk,
    /// Step 2: loss of service across all devices.
    AllDevicesAffected,
    /// Step 2: a single device is affected.
    SingleDeviceOnly,
    /// Step 3: cabling confirmed correct (or not).
    RecordCabling(Answer),
    /// Step 3: is the ONT optical light red?
    RecordOpticalRed(Answer),
    /// Step 3 advance, valid once cabling is correct and the light is not red.
    ProceedToRagStatus,
    /// Step 4: Circuit RAG indicator green (or not).
    RecordCircuitGreen(Answer),
    /// Step 4: Router RAG indicator green (or not).
    RecordRouterGreen(Answer),
    /// Step 4 advance, valid once either indicator is not green.
    ProceedToReboot,
    /// Step 5: customer completed the power cycle.
    RebootCompleted,
    /// Step 6: is the circuit back online?
    RecordOnline(Answer),
    /// Return to step 1 from the single-device outcome.
    Back,
}

/// Terminal outcomes of the TLOS workflow, embedded in the step that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlosOutcome {
    /// Step 1: no power at the ONT.
    PowerNotConnected,
    /// Step 2: single-device problem, not a line fault.
    SingleDeviceIssue,
    /// Step 3: red optical light on the ONT.
    RedOpticalLight,
    /// Step 4: both RAG indicators green, the line is up.
    ConnectionWorking,
    /// Step 6: reboot brought the service back.
    ServiceRestored,
    /// Step 6: still offline after the reboot.
    StillOffline,
}

impl TlosOutcome {
    /// Outcomes that hand the case to the service-visit escalation process.
    pub fn requires_escalation(&self) -> bool {
        matches!(
            self,
            TlosOutcome::RedOpticalLight | TlosOutcome::StillOffline
        )
    }
}

impl fmt::Display for TlosOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TlosOutcome::PowerNotConnected => {
                "Ensure power is connected. If resolved, end call."
            }
            TlosOutcome::SingleDeviceIssue => "Refer to 'Device Connectivity' KB article.",
            TlosOutcome::RedOpticalLight => {
                "RED Light detected. Check green fibre cable. If persists, \
                 follow Service Visit escalation."
            }
            TlosOutcome::ConnectionWorking => {
                "Connection appears working. Refer to 'Device Connectivity' KB."
            }
            TlosOutcome::ServiceRestored => "Service restored by reboot.",
            TlosOutcome::StillOffline => {
                "Still offline. Follow 'Service Visit' escalation process."
            }
        };
        write!(f, "{}", s)
    }
}
