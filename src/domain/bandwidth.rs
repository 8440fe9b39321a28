//! Bandwidth capacity estimation.
//!
//! Pure domain service mapping (WiFi standard, signal strength) to an
//! estimated number of simultaneous 4K-stream equivalents. Used by the
//! slow-speeds report to give the agent a concrete "what this connection
//! can carry" figure for the case note.

use super::foundation::WifiStandard;

/// Signal below this loses half the base capacity.
const HEAVY_DEGRADATION_DBM: i32 = -60;
/// Signal below this (but above the heavy threshold) keeps 80%.
const MILD_DEGRADATION_DBM: i32 = -50;

/// Estimates simultaneous 4K-stream capacity for a standard at a given
/// signal strength.
///
/// The thresholds are evaluated most-negative first, so they never overlap:
/// at or below -60 dBm the base capacity is halved, at or below -50 dBm it
/// is multiplied by 0.8, otherwise it is unchanged. The result is rounded
/// to two decimal places. An `Unknown` standard yields 0.0 deterministically.
pub fn estimate(standard: WifiStandard, rssi_dbm: i32) -> f64 {
    let base = standard.base_capacity();
    let factor = if rssi_dbm <= HEAVY_DEGRADATION_DBM {
        0.5
    } else if rssi_dbm <= MILD_DEGRADATION_DBM {
        0.8
    } else {
        1.0
    };
    round_to_2dp(base * factor)
}

fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
