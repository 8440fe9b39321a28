//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ISP Triage domain.

mod answer;
mod errors;
mod ids;
mod rssi;
mod state_machine;
mod timestamp;
mod wifi_standard;

pub use answer::{Answer, RadioInput};
pub use errors::ValidationError;
pub use ids::SessionId;
pub use rssi::Rssi;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use wifi_standard::WifiStandard;
