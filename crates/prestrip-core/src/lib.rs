pub mod classify;
pub mod provider;
pub mod sink;
pub mod snapshot;
pub mod strip;
pub mod tracker;

use std::path::PathBuf;
use thiserror::Error;

pub use snapshot::{FlightPlanSnapshot, TrackCorrelation};
pub use strip::StripPayload;
pub use tracker::PrefileTracker;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed feed: {0}")]
    Parse(#[from] serde_json::Error),
}
