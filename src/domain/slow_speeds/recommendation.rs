//! Recommendation outcome codes and the branch classifiers.
//!
//! The classifiers are pure functions over submissions; rules are evaluated
//! in priority order and the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Answer;

use super::events::{AdvancedCircuitSubmission, CircuitSubmission, WifiSubmission};

/// Final recommendation codes for the case note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Default when no specific fault is identified.
    #[default]
    GeneralWifiOptimization,
    MeshExtenderRequired,
    RouterPlacementIssue,
    PhysicalObstruction5Ghz,
    ConcurrentUsageLimit,
    PhysicalFaultRepairRequired,
    M1CircuitError,
    ProvisioningMismatch,
    MaintenanceTrendDetected,
}

impl Recommendation {
    /// The fixed outcome code printed on the FINAL OUTCOME line.
    pub fn code(&self) -> &'static str {
        match self {
            Recommendation::GeneralWifiOptimization => "GENERAL WIFI OPTIMIZATION",
            Recommendation::MeshExtenderRequired => "MESH EXTENDER REQUIRED",
            Recommendation::RouterPlacementIssue => "ROUTER PLACEMENT ISSUE",
            Recommendation::PhysicalObstruction5Ghz => "PHYSICAL OBSTRUCTION - 5GHz",
            Recommendation::ConcurrentUsageLimit => "CONCURRENT USAGE LIMIT",
            Recommendation::PhysicalFaultRepairRequired => "PHYSICAL FAULT - REPAIR REQ",
            Recommendation::M1CircuitError => "M1 CIRCUIT ERROR",
            Recommendation::ProvisioningMismatch => "PROVISIONING MISMATCH",
            Recommendation::MaintenanceTrendDetected => "MAINTENANCE TREND DETECTED",
        }
    }

    /// Outcomes that end in a repair ticket rather than WiFi guidance.
    pub fn is_circuit_fault(&self) -> bool {
        matches!(
            self,
            Recommendation::PhysicalFaultRepairRequired
                | Recommendation::M1CircuitError
                | Recommendation::ProvisioningMismatch
                | Recommendation::MaintenanceTrendDetected
        )
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Where circuit analysis sends the diagnosis next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitAnalysis {
    /// A fault was identified; go straight to the report.
    Fault(Recommendation),
    /// Line looks healthy but the speed test failed; run the advanced
    /// analysis.
    NeedsAdvancedAnalysis,
    /// Line verified healthy; move on to WiFi diagnosis.
    LineHealthy,
}

/// Phase 2 branch rules, in priority order.
pub fn classify_circuit(sub: &CircuitSubmission) -> CircuitAnalysis {
    if sub.ont_light_ok.is_no() || sub.cables_undamaged.is_no() {
        CircuitAnalysis::Fault(Recommendation::PhysicalFaultRepairRequired)
    } else if sub.m1_rag_green.is_no() {
        CircuitAnalysis::Fault(Recommendation::M1CircuitError)
    } else if sub.speed_test_green.is_no() {
        CircuitAnalysis::NeedsAdvancedAnalysis
    } else {
        CircuitAnalysis::LineHealthy
    }
}

/// Phase 2.5 branch rules, in priority order. Never defers further: the
/// advanced analysis either finds a fault or clears the line.
pub fn classify_advanced_circuit(sub: &AdvancedCircuitSubmission) -> CircuitAnalysis {
    if sub.plan_matches_profile.is_no() {
        CircuitAnalysis::Fault(Recommendation::ProvisioningMismatch)
    } else if sub.trend_consistent.is_no() {
        CircuitAnalysis::Fault(Recommendation::MaintenanceTrendDetected)
    } else {
        CircuitAnalysis::LineHealthy
    }
}

/// Weakest signal that still avoids a mesh extender recommendation.
const MESH_EXTENDER_THRESHOLD_DBM: i32 = -67;

/// Phase 3 WiFi rules, in priority order. Always yields a recommendation.
pub fn classify_wifi(sub: &WifiSubmission) -> Recommendation {
    let obstructed_5ghz = sub.on_5ghz.is_yes()
        && (sub.same_room == Some(Answer::No) || sub.clear_los == Some(Answer::No));

    if sub.rssi.dbm() <= MESH_EXTENDER_THRESHOLD_DBM {
        Recommendation::MeshExtenderRequired
    } else if sub.enclosed_placement.is_yes() {
        Recommendation::RouterPlacementIssue
    } else if obstructed_5ghz {
        Recommendation::PhysicalObstruction5Ghz
    } else if sub.high_load_users.is_yes() {
        Recommendation::ConcurrentUsageLimit
    } else {
        Recommendation::GeneralWifiOptimization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, Rssi, WifiStandard};

    fn healthy_circuit() -> CircuitSubmission {
        CircuitSubmission {
            ont_light_ok: Answer::Yes,
            cables_undamaged: Answer::Yes,
            cables_plugged: Answer::Yes,
            m1_rag_green: Answer::Yes,
            speed_test_green: Answer::Yes,
        }
    }

    fn clean_wifi(rssi_dbm: i32) -> WifiSubmission {
        WifiSubmission {
            rssi: Rssi::new(rssi_dbm).unwrap(),
            on_5ghz: Answer::No,
            enclosed_placement: Answer::No,
            gaming_lag: Answer::No,
            high_load_users: Answer::No,
            standard: WifiStandard::Ax,
            same_room: None,
            clear_los: None,
        }
    }

    #[test]
    fn healthy_circuit_clears_the_line() {
        assert_eq!(classify_circuit(&healthy_circuit()), CircuitAnalysis::LineHealthy);
    }

    #[test]
    fn bad_ont_light_is_a_physical_fault() {
        let sub = CircuitSubmission {
            ont_light_ok: Answer::No,
            ..healthy_circuit()
        };
        assert_eq!(
            classify_circuit(&sub),
            CircuitAnalysis::Fault(Recommendation::PhysicalFaultRepairRequired)
        );
    }

    #[test]
    fn physical_fault_outranks_failed_speed_test() {
        let sub = CircuitSubmission {
            ont_light_ok: Answer::No,
            speed_test_green: Answer::No,
            ..healthy_circuit()
        };
        assert_eq!(
            classify_circuit(&sub),
            CircuitAnalysis::Fault(Recommendation::PhysicalFaultRepairRequired)
        );
    }

    #[test]
    fn non_green_m1_outranks_failed_speed_test() {
        let sub = CircuitSubmission {
            m1_rag_green: Answer::No,
            speed_test_green: Answer::No,
            ..healthy_circuit()
        };
        assert_eq!(
            classify_circuit(&sub),
            CircuitAnalysis::Fault(Recommendation::M1CircuitError)
        );
    }

    #[test]
    fn failed_speed_test_alone_defers_to_advanced_analysis() {
        let sub = CircuitSubmission {
            speed_test_green: Answer::No,
            ..healthy_circuit()
        };
        assert_eq!(classify_circuit(&sub), CircuitAnalysis::NeedsAdvancedAnalysis);
    }

    #[test]
    fn unplugged_cables_do_not_affect_the_branch() {
        let sub = CircuitSubmission {
            cables_plugged: Answer::No,
            ..healthy_circuit()
        };
        assert_eq!(classify_circuit(&sub), CircuitAnalysis::LineHealthy);
    }

    #[test]
    fn plan_mismatch_outranks_trend() {
        let sub = AdvancedCircuitSubmission {
            plan_matches_profile: Answer::No,
            trend_consistent: Answer::No,
        };
        assert_eq!(
            classify_advanced_circuit(&sub),
            CircuitAnalysis::Fault(Recommendation::ProvisioningMismatch)
        );
    }

    #[test]
    fn inconsistent_trend_is_a_maintenance_fault() {
        let sub = AdvancedCircuitSubmission {
            plan_matches_profile: Answer::Yes,
            trend_consistent: Answer::No,
        };
        assert_eq!(
            classify_advanced_circuit(&sub),
            CircuitAnalysis::Fault(Recommendation::MaintenanceTrendDetected)
        );
    }

    #[test]
    fn consistent_advanced_analysis_clears_the_line() {
        let sub = AdvancedCircuitSubmission {
            plan_matches_profile: Answer::Yes,
            trend_consistent: Answer::Yes,
        };
        assert_eq!(classify_advanced_circuit(&sub), CircuitAnalysis::LineHealthy);
    }

    #[test]
    fn weak_signal_wins_over_every_other_rule() {
        let sub = WifiSubmission {
            enclosed_placement: Answer::Yes,
            high_load_users: Answer::Yes,
            ..clean_wifi(-67)
        };
        assert_eq!(classify_wifi(&sub), Recommendation::MeshExtenderRequired);
    }

    #[test]
    fn enclosed_placement_is_second_priority() {
        let sub = WifiSubmission {
            enclosed_placement: Answer::Yes,
            high_load_users: Answer::Yes,
            ..clean_wifi(-40)
        };
        assert_eq!(classify_wifi(&sub), Recommendation::RouterPlacementIssue);
    }

    #[test]
    fn obstructed_5ghz_requires_the_5ghz_band() {
        let obstructed = WifiSubmission {
            on_5ghz: Answer::Yes,
            same_room: Some(Answer::Yes),
            clear_los: Some(Answer::No),
            ..clean_wifi(-40)
        };
        assert_eq!(classify_wifi(&obstructed), Recommendation::PhysicalObstruction5Ghz);

        // Same answers off 5GHz never trigger the obstruction rule.
        let off_band = WifiSubmission {
            on_5ghz: Answer::No,
            ..obstructed
        };
        assert_eq!(classify_wifi(&off_band), Recommendation::GeneralWifiOptimization);
    }

    #[test]
    fn high_load_is_fourth_priority() {
        let sub = WifiSubmission {
            high_load_users: Answer::Yes,
            ..clean_wifi(-40)
        };
        assert_eq!(classify_wifi(&sub), Recommendation::ConcurrentUsageLimit);
    }

    #[test]
    fn clean_telemetry_falls_through_to_general_optimization() {
        assert_eq!(
            classify_wifi(&clean_wifi(-40)),
            Recommendation::GeneralWifiOptimization
        );
    }

    #[test]
    fn gaming_lag_does_not_affect_classification() {
        let sub = WifiSubmission {
            gaming_lag: Answer::Yes,
            ..clean_wifi(-40)
        };
        assert_eq!(classify_wifi(&sub), Recommendation::GeneralWifiOptimization);
    }

    #[test]
    fn codes_match_case_note_contract() {
        assert_eq!(
            Recommendation::PhysicalFaultRepairRequired.code(),
            "PHYSICAL FAULT - REPAIR REQ"
        );
        assert_eq!(
            Recommendation::PhysicalObstruction5Ghz.code(),
            "PHYSICAL OBSTRUCTION - 5GHz"
        );
        assert_eq!(
            format!("{}", Recommendation::MeshExtenderRequired),
            "MESH EXTENDER REQUIRED"
        );
    }

    #[test]
    fn circuit_faults_are_flagged() {
        assert!(Recommendation::M1CircuitError.is_circuit_fault());
        assert!(Recommendation::ProvisioningMismatch.is_circuit_fault());
        assert!(!Recommendation::MeshExtenderRequired.is_circuit_fault());
        assert!(!Recommendation::GeneralWifiOptimization.is_circuit_fault());
    }
}
