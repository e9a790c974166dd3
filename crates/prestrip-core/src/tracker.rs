// SPDX-License-Identifier: MIT

use crate::classify::is_eligible_prefile;
use crate::provider::FlightPlanProvider;
use crate::sink::StripSink;
use crate::snapshot::FlightPlanSnapshot;
use crate::strip::format_strip;
use log::{info, warn};
use std::collections::HashSet;

/// Dedup tracker and dispatcher: decides which observed flight plans are new
/// prefiles and emits each one's strip at most once per process lifetime.
///
/// The seen set grows monotonically and is never persisted; a restart starts
/// clean. Both entry points are infallible by contract — every failure
/// downstream (provider enumeration, sink delivery) is logged and absorbed.
pub struct PrefileTracker {
    seen: HashSet<String>,
    sink: Box<dyn StripSink>,
}

impl PrefileTracker {
    pub fn new(sink: Box<dyn StripSink>) -> Self {
        Self {
            seen: HashSet::new(),
            sink,
        }
    }

    /// Bulk scan: run the per-flight procedure over everything the provider
    /// currently knows. Called on the host's poll cadence.
    pub fn on_scan_tick(&mut self, provider: &dyn FlightPlanProvider) {
        let snapshots = match provider.snapshots() {
            Ok(snapshots) => snapshots,
            Err(e) => {
                warn!("Flight plan enumeration failed; skipping tick — error={:#}", e);
                return;
            }
        };

        for snapshot in &snapshots {
            self.consider(snapshot);
        }
    }

    /// Event path: the host noticed a field change on one flight plan.
    /// Converges on the same per-flight procedure as the bulk scan.
    pub fn on_flight_plan_update(&mut self, snapshot: &FlightPlanSnapshot) {
        self.consider(snapshot);
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn has_seen(&self, callsign: &str) -> bool {
        self.seen.contains(callsign)
    }

    fn consider(&mut self, snapshot: &FlightPlanSnapshot) {
        if snapshot.callsign.is_empty() {
            return;
        }
        if self.seen.contains(&snapshot.callsign) {
            return;
        }
        if !is_eligible_prefile(snapshot) {
            // Not rejected for good: fields may fill in by the next poll.
            return;
        }

        // Mark handled before the sink call. A slow or failing sink must not
        // leave the flight re-printable on a later observation.
        self.seen.insert(snapshot.callsign.clone());

        let payload = format_strip(snapshot);
        match self.sink.deliver(&payload) {
            Ok(()) => info!("Printed prefile strip — callsign={}", payload.callsign()),
            Err(e) => warn!(
                "Strip delivery failed; not retrying — callsign={} error={:#}",
                payload.callsign(),
                e
            ),
        }
    }
}
