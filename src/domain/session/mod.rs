//! Session domain module.
//!
//! A session is one agent helping one customer. It owns the active workflow
//! selection, both workflow state machines, and the shared diagnostic
//! notes, and is the single entry point the presentation adapter talks to.

mod aggregate;
mod events;

pub use aggregate::{Event, Session, WorkflowSelection, WorkflowState};
pub use events::SessionEvent;
