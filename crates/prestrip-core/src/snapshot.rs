use serde::{Deserialize, Serialize};

/// Whether a flight plan is linked to a live radar target.
///
/// `Unknown` covers the case where the host could not answer the correlation
/// query for this flight; the classifier treats it the same as
/// `Uncorrelated`, so a failed query can never suppress a real prefile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackCorrelation {
    Correlated,
    Uncorrelated,
    #[default]
    Unknown,
}

/// A read-only view of one flight's plan at observation time.
///
/// Snapshots are ephemeral: the host (or the feed file) rebuilds them on
/// every observation, and fields fill in over time as the plan is amended.
/// The callsign is the identity — two snapshots with the same non-empty
/// callsign refer to the same flight even when every other field differs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightPlanSnapshot {
    #[serde(default)]
    pub callsign: String,
    #[serde(default)]
    pub correlation: TrackCorrelation,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub cruise_level: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub wake_category: String,
    #[serde(default)]
    pub equipment: String,
}

impl FlightPlanSnapshot {
    pub fn is_correlated(&self) -> bool {
        self.correlation == TrackCorrelation::Correlated
    }
}
