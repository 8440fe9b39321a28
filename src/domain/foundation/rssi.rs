//! RSSI (received signal strength) value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Received signal strength in dBm, validated into [-100, 0].
///
/// The display string ("{val} dBm") is always derived from the stored value,
/// so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rssi(i32);

impl Rssi {
    /// Weakest representable signal.
    pub const MIN_DBM: i32 = -100;
    /// Strongest representable signal.
    pub const MAX_DBM: i32 = 0;

    /// Creates an RSSI reading.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `dbm` falls outside [-100, 0].
    pub fn new(dbm: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN_DBM..=Self::MAX_DBM).contains(&dbm) {
            return Err(ValidationError::out_of_range(
                "rssi",
                Self::MIN_DBM,
                Self::MAX_DBM,
                dbm,
            ));
        }
        Ok(Self(dbm))
    }

    /// Returns the reading in dBm.
    pub fn dbm(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Rssi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dBm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_in_range() {
        assert_eq!(Rssi::new(-50).unwrap().dbm(), -50);
        assert_eq!(Rssi::new(0).unwrap().dbm(), 0);
        assert_eq!(Rssi::new(-100).unwrap().dbm(), -100);
    }

    #[test]
    fn rejects_positive_values() {
        assert!(Rssi::new(7).is_err());
    }

    #[test]
    fn rejects_values_below_minus_100() {
        assert!(Rssi::new(-101).is_err());
    }

    #[test]
    fn display_derives_dbm_string() {
        assert_eq!(format!("{}", Rssi::new(-67).unwrap()), "-67 dBm");
    }

    #[test]
    fn orders_by_signal_strength() {
        let weak = Rssi::new(-80).unwrap();
        let strong = Rssi::new(-40).unwrap();
        assert!(weak < strong);
    }
}
