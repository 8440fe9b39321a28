//! WiFi standard (802.11 generation) value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 802.11 generation a device is connected with.
///
/// `Unknown` covers anything the agent could not identify; it carries zero
/// base capacity so the estimator degrades gracefully instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WifiStandard {
    /// 802.11be (WiFi 7)
    Be,
    /// 802.11ax (WiFi 6)
    Ax,
    /// 802.11ac (WiFi 5)
    Ac,
    /// 802.11n (WiFi 4)
    N,
    /// 802.11g
    G,
    /// 802.11a
    A,
    /// 802.11b
    B,
    /// Pre-802.11b equipment
    Legacy,
    /// Not identified by the agent
    #[default]
    Unknown,
}

impl WifiStandard {
    /// Standards an agent can actually select on the form.
    pub const SELECTABLE: [WifiStandard; 8] = [
        WifiStandard::Be,
        WifiStandard::Ax,
        WifiStandard::Ac,
        WifiStandard::N,
        WifiStandard::G,
        WifiStandard::A,
        WifiStandard::B,
        WifiStandard::Legacy,
    ];

    /// Base capacity in simultaneous 4K-stream equivalents, before any
    /// signal degradation is applied.
    pub fn base_capacity(&self) -> f64 {
        match self {
            WifiStandard::Be => 100.0,
            WifiStandard::Ax => 40.0,
            WifiStandard::Ac => 15.0,
            WifiStandard::N => 2.0,
            WifiStandard::G => 0.5,
            WifiStandard::A => 0.5,
            WifiStandard::B => 0.1,
            WifiStandard::Legacy => 0.05,
            WifiStandard::Unknown => 0.0,
        }
    }

    /// Short lowercase code, as the line-test tooling reports it.
    pub fn code(&self) -> &'static str {
        match self {
            WifiStandard::Be => "be",
            WifiStandard::Ax => "ax",
            WifiStandard::Ac => "ac",
            WifiStandard::N => "n",
            WifiStandard::G => "g",
            WifiStandard::A => "a",
            WifiStandard::B => "b",
            WifiStandard::Legacy => "legacy",
            WifiStandard::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WifiStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for WifiStandard {
    type Err = std::convert::Infallible;

    /// Unrecognized codes map to `Unknown` rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "be" => WifiStandard::Be,
            "ax" => WifiStandard::Ax,
            "ac" => WifiStandard::Ac,
            "n" => WifiStandard::N,
            "g" => WifiStandard::G,
            "a" => WifiStandard::A,
            "b" => WifiStandard::B,
            "legacy" => WifiStandard::Legacy,
            _ => WifiStandard::Unknown,
        })
    }
}
