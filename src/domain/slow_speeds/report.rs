//! Diagnostic report compilation.
//!
//! The case-note block is a stable contract: agents copy-paste it into the
//! external case-management tool, so labels, field order, and column
//! alignment must not change.

use serde::{Deserialize, Serialize};

use crate::domain::bandwidth;
use crate::domain::notes::DiagnosticNotes;

use super::Recommendation;

/// The read-only output of the report phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// The final recommendation.
    pub recommendation: Recommendation,
    /// Estimated simultaneous 4K-stream capacity.
    pub estimated_streams: f64,
    /// Customer-facing script for the agent to read out.
    pub customer_script: String,
    /// Fixed-format, line-oriented case-note block.
    pub case_note: String,
}

impl DiagnosticReport {
    /// Compiles the report from the accumulated notes.
    pub fn compile(notes: &DiagnosticNotes) -> Self {
        let recommendation = notes.recommendation();
        let estimated_streams =
            bandwidth::estimate(notes.standard(), notes.rssi_dbm_or_default());

        let customer_script = format!(
            "Your line tests are healthy. However, your speed is being impacted by {}. \
             We recommend repositioning for better line-of-sight to the router.",
            recommendation.code().to_lowercase()
        );

        let case_note = format!(
            "DIAGNOSTIC DATE: {}\n\
             IMPACT SCOPE:    {}\n\
             SYNC STATUS:     {}\n\
             HW REBOOTED:     {}\n\
             DEVICE RSSI:     {}\n\
             WLAN BAND:       {}\n\
             PLACEMENT:       {}\n\
             SAME ROOM (5G):  {}\n\
             LINE OF SIGHT:   {}\n\
             WIFI STANDARD:   {}\n\
             EST. CAPACITY:   ~{} simultaneous 4K streams\n\
             FINAL OUTCOME:   {}",
            notes.timestamp().case_note_format(),
            notes
                .scope()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            notes.sync_status(),
            notes.reboot_done(),
            notes
                .rssi()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            notes
                .band()
                .map(|b| b.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            notes.placement(),
            notes
                .same_room()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            notes
                .los()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            notes.standard().code().to_uppercase(),
            estimated_streams,
            recommendation,
        );

        Self {
            recommendation,
            estimated_streams,
            customer_script,
            case_note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, Rssi, Timestamp, WifiStandard};
    use crate::domain::notes::{Band, ImpactScope};
    use chrono::{TimeZone, Utc};

    fn notes_at(ts: &str) -> DiagnosticNotes {
        let dt = Utc.with_ymd_and_hms(2024, 5, 20, 10, 30, 0).unwrap();
        assert_eq!(ts, "2024-05-20 10:30");
        DiagnosticNotes::new(Timestamp::from_datetime(dt))
    }

    #[test]
    fn report_with_full_wifi_telemetry() {
        let mut notes = notes_at("2024-05-20 10:30");
        notes.record_validation(Answer::Yes, ImpactScope::WholeLan);
        notes.record_sync_stable();
        notes.record_wifi_telemetry(
            Rssi::new(-55).unwrap(),
            WifiStandard::N,
            Band::FiveGhz,
            Some(Answer::Yes),
            Some(Answer::Yes),
        );
        notes.set_recommendation(Recommendation::ConcurrentUsageLimit);

        let report = DiagnosticReport::compile(&notes);
        assert_eq!(report.estimated_streams, 1.6);
        assert_eq!(
            report.case_note,
            "DIAGNOSTIC DATE: 2024-05-20 10:30\n\
             IMPACT SCOPE:    Whole LAN\n\
             SYNC STATUS:     STABLE/IN-RANGE\n\
             HW REBOOTED:     Yes\n\
             DEVICE RSSI:     -55 dBm\n\
             WLAN BAND:       5GHz\n\
             PLACEMENT:       Optimal\n\
             SAME ROOM (5G):  Yes\n\
             LINE OF SIGHT:   Yes\n\
             WIFI STANDARD:   N\n\
             EST. CAPACITY:   ~1.6 simultaneous 4K streams\n\
             FINAL OUTCOME:   CONCURRENT USAGE LIMIT"
        );
    }

    #[test]
    fn report_after_circuit_fault_uses_sentinels() {
        let mut notes = notes_at("2024-05-20 10:30");
        notes.record_validation(Answer::No, ImpactScope::SingleDevice);
        notes.set_recommendation(Recommendation::PhysicalFaultRepairRequired);

        let report = DiagnosticReport::compile(&notes);
        // No WiFi telemetry: unknown standard estimates zero capacity.
        assert_eq!(report.estimated_streams, 0.0);
        assert!(report.case_note.contains("SYNC STATUS:     Unknown"));
        assert!(report.case_note.contains("DEVICE RSSI:     N/A"));
        assert!(report.case_note.contains("WLAN BAND:       Unknown"));
        assert!(report.case_note.contains("SAME ROOM (5G):  N/A"));
        assert!(report.case_note.contains("WIFI STANDARD:   UNKNOWN"));
        assert!(report.case_note.contains("EST. CAPACITY:   ~0 simultaneous 4K streams"));
        assert!(report
            .case_note
            .ends_with("FINAL OUTCOME:   PHYSICAL FAULT - REPAIR REQ"));
    }

    #[test]
    fn customer_script_lowercases_the_recommendation() {
        let mut notes = notes_at("2024-05-20 10:30");
        notes.set_recommendation(Recommendation::MeshExtenderRequired);

        let report = DiagnosticReport::compile(&notes);
        assert_eq!(
            report.customer_script,
            "Your line tests are healthy. However, your speed is being impacted by \
             mesh extender required. We recommend repositioning for better \
             line-of-sight to the router."
        );
    }

    #[test]
    fn whole_capacity_prints_without_decimals() {
        let mut notes = notes_at("2024-05-20 10:30");
        notes.record_wifi_telemetry(
            Rssi::new(-40).unwrap(),
            WifiStandard::Ax,
            Band::TwoPointFourGhz,
            None,
            None,
        );
        let report = DiagnosticReport::compile(&notes);
        assert!(report.case_note.contains("EST. CAPACITY:   ~40 simultaneous 4K streams"));
    }
}
