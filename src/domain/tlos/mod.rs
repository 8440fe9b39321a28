//! FTTP TLOS (total loss of service) troubleshooting workflow.
//!
//! A six-step state machine walking the agent from the initial power check
//! to the post-reboot online check. Terminal outcomes are embedded in the
//! steps that produce them; the workflow halts on an outcome until the
//! session is reset.

mod aggregate;
mod events;
mod step;

pub use aggregate::TlosWorkflow;
pub use events::{TlosEvent, TlosOutcome};
pub use step::TlosStep;
