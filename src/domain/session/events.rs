//! Session domain events.
//!
//! Recorded by the aggregate as dispatches happen so the presentation
//! adapter can observe what a call did without diffing state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

use super::{WorkflowSelection, WorkflowState};

/// Events recorded by the session aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// The agent picked a diagnostic workflow.
    WorkflowSelected {
        session_id: SessionId,
        workflow: WorkflowSelection,
    },
    /// The session was fully reset (fresh notes, initial steps).
    SessionReset { session_id: SessionId },
    /// A dispatch moved the active workflow to a new state.
    StateChanged {
        session_id: SessionId,
        from: WorkflowState,
        to: WorkflowState,
    },
}
