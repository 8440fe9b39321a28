//! TLOS workflow steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The six steps of the TLOS troubleshooter, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TlosStep {
    /// Step 1: confirm the ONT has power.
    #[default]
    PowerCheck,
    /// Step 2: confirm the loss affects multiple devices.
    DeviceConnectivity,
    /// Step 3: cabling check and ONT optical light.
    CablingCheck,
    /// Step 4: Circuit/Router RAG indicators in the line-test tool.
    RagStatus,
    /// Step 5: power cycle ONT and router.
    Reboot,
    /// Step 6: post-reboot online check.
    FinalCheck,
}

impl TlosStep {
    /// 1-based step number as shown to the agent.
    pub fn number(&self) -> u8 {
        match self {
            TlosStep::PowerCheck => 1,
            TlosStep::DeviceConnectivity => 2,
            TlosStep::CablingCheck => 3,
            TlosStep::RagStatus => 4,
            TlosStep::Reboot => 5,
            TlosStep::FinalCheck => 6,
        }
    }

    /// Step heading for the adapter to render.
    pub fn title(&self) -> &'static str {
        match self {
            TlosStep::PowerCheck => "Initial Power Check",
            TlosStep::DeviceConnectivity => "Device Connectivity Check",
            TlosStep::CablingCheck => "Mosaic One Care & Physical Check",
            TlosStep::RagStatus => "Mosaic RAG Status",
            TlosStep::Reboot => "Reboot Equipment",
            TlosStep::FinalCheck => "Final Online Check",
        }
    }

    /// Agent script or instruction for this step.
    pub fn prompt(&self) -> &'static str {
        match self {
            TlosStep::PowerCheck => {
                "Agent: 'Can I just check that power is going to the ONT? \
                 Are you able to check that the plug is correctly inserted?'"
            }
            TlosStep::DeviceConnectivity => {
                "Agent: 'Can you confirm that you are experiencing a loss of \
                 service across multiple devices (phone, laptop, TV)?'"
            }
            TlosStep::CablingCheck => {
                "Agent: 'Please check the cables. Green head on the far left \
                 of the ONT, and Ethernet next to it connected to the Router \
                 WAN port.'"
            }
            TlosStep::RagStatus => {
                "Navigate to Mosaic One Care and read the Circuit and Router \
                 RAG indicators."
            }
            TlosStep::Reboot => {
                "Agent: 'Please power off both the ONT and the router. Wait \
                 15 seconds, then turn them back on.'"
            }
            TlosStep::FinalCheck => "After 2 minutes, is the circuit now ONLINE?",
        }
    }
}

impl StateMachine for TlosStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TlosStep::*;
        matches!(
            (self, target),
            (PowerCheck, DeviceConnectivity)
                | (DeviceConnectivity, CablingCheck)
                | (CablingCheck, RagStatus)
                | (RagStatus, Reboot)
                | (Reboot, FinalCheck)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TlosStep::*;
        match self {
            PowerCheck => vec![DeviceConnectivity],
            DeviceConnectivity => vec![CablingCheck],
            CablingCheck => vec![RagStatus],
            RagStatus => vec![Reboot],
            Reboot => vec![FinalCheck],
            FinalCheck => vec![],
        }
    }
}

impl fmt::Display for TlosStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}
