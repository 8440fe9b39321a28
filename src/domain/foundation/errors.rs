//! Error types for the domain layer.
//!
//! Only value-object construction can fail here. Workflow transitions are
//! total: an event that does not apply to the current state is ignored,
//! never an error.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        actual: i32,
    },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: &'static str, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("rssi", -100, 0, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'rssi' must be between -100 and 0, got 7"
        );
    }
}
