//! Agent answer value objects.
//!
//! Two shapes cover every question the workflows ask: a plain yes/no
//! `Answer`, and the three-valued `RadioInput` used by the TLOS radio
//! groups, where `Pending` models "the agent has not asked yet".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-valued agent answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Returns true for `Yes`.
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Returns true for `No`.
    pub fn is_no(&self) -> bool {
        matches!(self, Answer::No)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        };
        write!(f, "{}", s)
    }
}

/// A three-valued radio answer defaulting to `Pending`.
///
/// `Pending` is the explicit absence of an answer; no transition fires while
/// a relevant radio is still pending, which makes the awaiting-input states
/// exhaustible in match expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RadioInput {
    #[default]
    Pending,
    Yes,
    No,
}

impl RadioInput {
    /// Returns true if an answer has been recorded.
    pub fn is_answered(&self) -> bool {
        !matches!(self, RadioInput::Pending)
    }

    /// Returns true for `Yes`.
    pub fn is_yes(&self) -> bool {
        matches!(self, RadioInput::Yes)
    }

    /// Returns true for `No`.
    pub fn is_no(&self) -> bool {
        matches!(self, RadioInput::No)
    }
}

impl From<Answer> for RadioInput {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => RadioInput::Yes,
            Answer::No => RadioInput::No,
        }
    }
}

impl fmt::Display for RadioInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RadioInput::Pending => "Pending",
            RadioInput::Yes => "Yes",
            RadioInput::No => "No",
        };
        write!(f, "{}", s)
    }
}
