//! Slow-speeds diagnosis workflow.
//!
//! Five phases: validation, FTTP circuit analysis, advanced circuit
//! analysis, WiFi telemetry, and the final report. Facts accumulate into
//! `DiagnosticNotes` as phases complete and are read only at report time.

mod aggregate;
mod events;
mod phase;
mod recommendation;
mod report;

pub use aggregate::SlowSpeedsWorkflow;
pub use events::{
    AdvancedCircuitSubmission, Advisory, CircuitSubmission, SlowSpeedsEvent, ValidationSubmission,
    WifiSubmission,
};
pub use phase::Phase;
pub use recommendation::{
    classify_advanced_circuit, classify_circuit, classify_wifi, CircuitAnalysis, Recommendation,
};
pub use report::DiagnosticReport;
