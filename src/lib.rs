//! ISP Triage - Guided Troubleshooting Workflow Engine
//!
//! This crate implements the decision-tree workflows used by helpdesk agents
//! to diagnose broadband and WiFi faults: the FTTP TLOS outage path and the
//! multi-phase slow-speeds path, plus the bandwidth capacity estimator and
//! the case-note report. The form-based UI that renders prompts and collects
//! answers is an external collaborator; this library is pure session logic.

pub mod domain;
