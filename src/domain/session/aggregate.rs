//! Session aggregate entity.
//!
//! The session is the workflow controller: it holds the active workflow
//! selection, the per-workflow state, and the shared diagnostic notes, and
//! routes agent events to whichever workflow is active.
//!
//! # Invariants
//!
//! - Exactly one workflow is active at a time.
//! - Switching workflows is a full reset: fresh notes, both workflows back
//!   to their initial step. There is no partial reset.
//! - `dispatch` is total: an event for an inactive workflow is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::notes::DiagnosticNotes;
use crate::domain::slow_speeds::{DiagnosticReport, Phase, SlowSpeedsEvent, SlowSpeedsWorkflow};
use crate::domain::tlos::{TlosEvent, TlosStep, TlosWorkflow};

use super::SessionEvent;

/// Which diagnostic workflow the agent has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowSelection {
    /// Landing state, no workflow running.
    #[default]
    Home,
    /// FTTP TLOS broadband troubleshooter.
    Tlos,
    /// Slow speeds troubleshooter.
    SlowSpeeds,
}

/// The externally visible state of the session: which workflow is active
/// and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Home,
    Tlos(TlosStep),
    SlowSpeeds(Phase),
}

/// Everything the presentation adapter can dispatch into a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// An answer or action for the TLOS workflow.
    Tlos(TlosEvent),
    /// A phase submission for the slow-speeds workflow.
    SlowSpeeds(SlowSpeedsEvent),
    /// Full session reset (the TLOS Finish button, the report's restart
    /// action, or any terminal Reset).
    Reset,
}

/// The session aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    workflow: WorkflowSelection,
    tlos: TlosWorkflow,
    slow_speeds: SlowSpeedsWorkflow,
    notes: DiagnosticNotes,
    #[serde(skip)]
    domain_events: Vec<SessionEvent>,
}

impl Session {
    /// Creates a session at the Home state with fresh notes.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            workflow: WorkflowSelection::Home,
            tlos: TlosWorkflow::new(),
            slow_speeds: SlowSpeedsWorkflow::new(),
            notes: DiagnosticNotes::new(Timestamp::now()),
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The active workflow selection.
    pub fn workflow(&self) -> WorkflowSelection {
        self.workflow
    }

    /// The externally visible state for the adapter to render.
    pub fn state(&self) -> WorkflowState {
        match self.workflow {
            WorkflowSelection::Home => WorkflowState::Home,
            WorkflowSelection::Tlos => WorkflowState::Tlos(self.tlos.step()),
            WorkflowSelection::SlowSpeeds => WorkflowState::SlowSpeeds(self.slow_speeds.phase()),
        }
    }

    /// The TLOS workflow (radio values, outcome, proceed validity).
    pub fn tlos(&self) -> &TlosWorkflow {
        &self.tlos
    }

    /// The slow-speeds workflow (phase, pending advisory).
    pub fn slow_speeds(&self) -> &SlowSpeedsWorkflow {
        &self.slow_speeds
    }

    /// The accumulated diagnostic notes.
    pub fn notes(&self) -> &DiagnosticNotes {
        &self.notes
    }

    /// The diagnostic report, once the slow-speeds workflow reaches it.
    pub fn report(&self) -> Option<DiagnosticReport> {
        match self.workflow {
            WorkflowSelection::SlowSpeeds => self.slow_speeds.report(&self.notes),
            _ => None,
        }
    }

    /// Domain events recorded since the last call, draining them.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Selects a workflow. Selecting a different workflow than the current
    /// one discards all state first; re-selecting the current one is a
    /// no-op.
    pub fn select(&mut self, workflow: WorkflowSelection) {
        if workflow == self.workflow {
            return;
        }
        tracing::debug!(session_id = %self.id, ?workflow, "workflow selected");
        self.reset_state();
        self.workflow = workflow;
        self.record(SessionEvent::WorkflowSelected {
            session_id: self.id,
            workflow,
        });
    }

    /// Full reset: fresh notes and both workflows back to their initial
    /// step, keeping the current selection. Idempotent.
    pub fn reset(&mut self) {
        tracing::debug!(session_id = %self.id, "session reset");
        self.reset_state();
        self.record(SessionEvent::SessionReset { session_id: self.id });
    }

    /// Routes an event to the active workflow and returns the new state.
    ///
    /// Events for an inactive workflow are ignored (state unchanged).
    pub fn dispatch(&mut self, event: Event) -> WorkflowState {
        let before = self.state();
        match (self.workflow, event) {
            (_, Event::Reset) => {
                self.reset();
            }
            (WorkflowSelection::Tlos, Event::Tlos(e)) => {
                self.tlos.apply(e);
            }
            (WorkflowSelection::SlowSpeeds, Event::SlowSpeeds(e)) => {
                self.slow_speeds.apply(e, &mut self.notes);
            }
            (workflow, event) => {
                tracing::warn!(?workflow, ?event, "event for inactive workflow, ignored");
            }
        }
        let after = self.state();
        if after != before {
            self.record(SessionEvent::StateChanged {
                session_id: self.id,
                from: before,
                to: after,
            });
        }
        after
    }

    /// Discards everything the session has gathered. Both workflows are
    /// re-initialized even though only one is active.
    fn reset_state(&mut self) {
        self.tlos = TlosWorkflow::new();
        self.slow_speeds = SlowSpeedsWorkflow::new();
        self.notes = DiagnosticNotes::new(Timestamp::now());
    }

    fn record(&mut self, event: SessionEvent) {
        self.domain_events.push(event);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
