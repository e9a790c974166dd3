use crate::snapshot::FlightPlanSnapshot;
use crate::FeedError;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Narrow view of the host's flight-plan store: enumerate everything it
/// currently knows, on demand. Change notifications go straight to the
/// tracker as single snapshots and bypass this trait.
pub trait FlightPlanProvider {
    fn snapshots(&self) -> Result<Vec<FlightPlanSnapshot>>;
}

/// File-backed provider: a JSON array of snapshots, re-read on every call.
///
/// The file stands in for the host's live store; editing it between polls is
/// how fields "fill in" over time.
#[derive(Debug, Clone)]
pub struct JsonFeed {
    path: PathBuf,
}

impl JsonFeed {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<FlightPlanSnapshot>, FeedError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FeedError::NotFound(self.path.clone())
            } else {
                FeedError::Io(e)
            }
        })?;
        let snapshots = serde_json::from_str(&content)?;
        Ok(snapshots)
    }
}

impl FlightPlanProvider for JsonFeed {
    fn snapshots(&self) -> Result<Vec<FlightPlanSnapshot>> {
        Ok(self.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedError;
    use tempfile::tempdir;

    #[test]
    fn test_load_feed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(
            &path,
            r#"[
                {"callsign": "BAW123", "origin": "EGLL", "destination": "KJFK"},
                {"callsign": "DLH4TK"}
            ]"#,
        )
        .unwrap();

        let feed = JsonFeed::new(&path);
        let snaps = feed.load().unwrap();

        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].callsign, "BAW123");
        assert_eq!(snaps[0].origin, "EGLL");
        assert_eq!(snaps[1].callsign, "DLH4TK");
        assert!(snaps[1].destination.is_empty());
    }

    #[test]
    fn test_missing_feed_is_typed() {
        let feed = JsonFeed::new("/no/such/feed.json");
        match feed.load() {
            Err(FeedError::NotFound(path)) => {
                assert_eq!(path, PathBuf::from("/no/such/feed.json"));
            }
            other => panic!("expected NotFound, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_malformed_feed_is_typed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(&path, "{not json").unwrap();

        let feed = JsonFeed::new(&path);
        assert!(matches!(feed.load(), Err(FeedError::Parse(_))));
    }
}
