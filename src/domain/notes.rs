//! Diagnostic notes - the accumulating record for a session.
//!
//! Facts gathered as the slow-speeds workflow progresses land here and are
//! read only at report time. Fields default to the sentinel values the case
//! note renders when a phase never ran ("Unknown", "N/A"). The whole record
//! is discarded on session reset. The `placement`, `ping`,
//! `background_data` and `household_load` fields are carried for case-note
//! completeness; nothing in the workflows mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::foundation::{Answer, Rssi, Timestamp, WifiStandard};
use super::slow_speeds::Recommendation;

/// RSSI assumed when the report is reached without WiFi telemetry
/// (circuit-fault exits skip Phase 3).
pub const DEFAULT_RSSI_DBM: i32 = -50;

/// Line sync health as observed in the line-test tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Unknown,
    StableInRange,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncStatus::Unknown => "Unknown",
            SyncStatus::StableInRange => "STABLE/IN-RANGE",
        };
        write!(f, "{}", s)
    }
}

/// Whether the slowness affects one device or the whole LAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactScope {
    SingleDevice,
    WholeLan,
}

impl fmt::Display for ImpactScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImpactScope::SingleDevice => "Single Device",
            ImpactScope::WholeLan => "Whole LAN",
        };
        write!(f, "{}", s)
    }
}

/// WLAN radio band the affected device is connected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    TwoPointFourGhz,
    FiveGhz,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::TwoPointFourGhz => "2.4GHz",
            Band::FiveGhz => "5GHz",
        };
        write!(f, "{}", s)
    }
}

/// The mutable per-session diagnostic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticNotes {
    timestamp: Timestamp,
    sync_status: SyncStatus,
    reboot_done: Answer,
    scope: Option<ImpactScope>,
    rssi: Option<Rssi>,
    band: Option<Band>,
    placement: String,
    same_room: Option<Answer>,
    los: Option<Answer>,
    standard: WifiStandard,
    ping: String,
    background_data: String,
    household_load: String,
    recommendation: Recommendation,
}

impl DiagnosticNotes {
    /// Creates a fresh record stamped with the session creation time.
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            sync_status: SyncStatus::Unknown,
            reboot_done: Answer::No,
            scope: None,
            rssi: None,
            band: None,
            placement: "Optimal".to_string(),
            same_room: None,
            los: None,
            standard: WifiStandard::Unknown,
            ping: "N/A".to_string(),
            background_data: "None detected".to_string(),
            household_load: "Light".to_string(),
            recommendation: Recommendation::default(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }

    pub fn reboot_done(&self) -> Answer {
        self.reboot_done
    }

    pub fn scope(&self) -> Option<ImpactScope> {
        self.scope
    }

    pub fn rssi(&self) -> Option<Rssi> {
        self.rssi
    }

    /// RSSI in dBm for capacity estimation, falling back to the default
    /// reading when Phase 3 never ran.
    pub fn rssi_dbm_or_default(&self) -> i32 {
        self.rssi.map(|r| r.dbm()).unwrap_or(DEFAULT_RSSI_DBM)
    }

    pub fn band(&self) -> Option<Band> {
        self.band
    }

    pub fn placement(&self) -> &str {
        &self.placement
    }

    pub fn same_room(&self) -> Option<Answer> {
        self.same_room
    }

    pub fn los(&self) -> Option<Answer> {
        self.los
    }

    pub fn standard(&self) -> WifiStandard {
        self.standard
    }

    pub fn ping(&self) -> &str {
        &self.ping
    }

    pub fn background_data(&self) -> &str {
        &self.background_data
    }

    pub fn household_load(&self) -> &str {
        &self.household_load
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    // ───────────────────────────────────────────────────────────────
    // Mutators (one per workflow phase that records facts)
    // ───────────────────────────────────────────────────────────────

    /// Records the Phase 1 validation facts.
    pub fn record_validation(&mut self, reboot_done: Answer, scope: ImpactScope) {
        self.reboot_done = reboot_done;
        self.scope = Some(scope);
    }

    /// Marks the line sync as verified stable by circuit analysis.
    pub fn record_sync_stable(&mut self) {
        self.sync_status = SyncStatus::StableInRange;
    }

    /// Records the Phase 3 WiFi telemetry.
    ///
    /// `same_room` and `los` are `None` for 2.4GHz connections, where the
    /// 5GHz environment questions are never asked.
    pub fn record_wifi_telemetry(
        &mut self,
        rssi: Rssi,
        standard: WifiStandard,
        band: Band,
        same_room: Option<Answer>,
        los: Option<Answer>,
    ) {
        self.rssi = Some(rssi);
        self.standard = standard;
        self.band = Some(band);
        self.same_room = same_room;
        self.los = los;
    }

    /// Sets the final recommendation.
    pub fn set_recommendation(&mut self, recommendation: Recommendation) {
        self.recommendation = recommendation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> DiagnosticNotes {
        DiagnosticNotes::new(Timestamp::now())
    }

    #[test]
    fn new_notes_carry_sentinel_defaults() {
        let notes = fresh();
        assert_eq!(notes.sync_status(), SyncStatus::Unknown);
        assert_eq!(notes.reboot_done(), Answer::No);
        assert_eq!(notes.scope(), None);
        assert_eq!(notes.rssi(), None);
        assert_eq!(notes.band(), None);
        assert_eq!(notes.placement(), "Optimal");
        assert_eq!(notes.same_room(), None);
        assert_eq!(notes.los(), None);
        assert_eq!(notes.standard(), WifiStandard::Unknown);
        assert_eq!(notes.ping(), "N/A");
        assert_eq!(notes.background_data(), "None detected");
        assert_eq!(notes.household_load(), "Light");
        assert_eq!(
            notes.recommendation(),
            Recommendation::GeneralWifiOptimization
        );
    }

    #[test]
    fn rssi_falls_back_to_default_when_unset() {
        let notes = fresh();
        assert_eq!(notes.rssi_dbm_or_default(), DEFAULT_RSSI_DBM);
    }

    #[test]
    fn record_validation_sets_reboot_and_scope() {
        let mut notes = fresh();
        notes.record_validation(Answer::Yes, ImpactScope::WholeLan);
        assert_eq!(notes.reboot_done(), Answer::Yes);
        assert_eq!(notes.scope(), Some(ImpactScope::WholeLan));
    }

    #[test]
    fn record_wifi_telemetry_derives_rssi_display() {
        let mut notes = fresh();
        let rssi = Rssi::new(-67).unwrap();
        notes.record_wifi_telemetry(
            rssi,
            WifiStandard::Ac,
            Band::FiveGhz,
            Some(Answer::Yes),
            Some(Answer::No),
        );
        assert_eq!(notes.rssi_dbm_or_default(), -67);
        assert_eq!(format!("{}", notes.rssi().unwrap()), "-67 dBm");
        assert_eq!(notes.band(), Some(Band::FiveGhz));
    }

    #[test]
    fn display_strings_match_case_note_vocabulary() {
        assert_eq!(format!("{}", SyncStatus::StableInRange), "STABLE/IN-RANGE");
        assert_eq!(format!("{}", ImpactScope::WholeLan), "Whole LAN");
        assert_eq!(format!("{}", ImpactScope::SingleDevice), "Single Device");
        assert_eq!(format!("{}", Band::FiveGhz), "5GHz");
        assert_eq!(format!("{}", Band::TwoPointFourGhz), "2.4GHz");
    }
}
