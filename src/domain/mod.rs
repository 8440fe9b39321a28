//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `bandwidth` - Pure capacity estimation from WiFi standard and signal
//! - `notes` - The accumulating diagnostic record for a session
//! - `tlos` - FTTP TLOS (total loss of service) troubleshooting workflow
//! - `slow_speeds` - Multi-phase slow-speeds diagnosis workflow and report
//! - `session` - Session aggregate: workflow selection, dispatch, reset

pub mod bandwidth;
pub mod foundation;
pub mod notes;
pub mod session;
pub mod slow_speeds;
pub mod tlos;
