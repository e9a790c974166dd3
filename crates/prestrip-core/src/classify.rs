// SPDX-License-Identifier: MIT

use crate::snapshot::FlightPlanSnapshot;

/// Decides whether one snapshot is a meaningful new prefile.
///
/// Pure and stateless, re-evaluated fresh on every observation: a plan that
/// is too empty to print now may gain an airport on the next poll, so nothing
/// here is cached.
///
/// Rules, in order:
/// 1. An empty callsign is an unusable record, never eligible.
/// 2. A flight correlated to a live radar target is already active, not a
///    prefile. An `Unknown` correlation counts as not correlated.
/// 3. At least one of origin/destination must be set; a plan with neither is
///    deferred, not rejected.
pub fn is_eligible_prefile(snapshot: &FlightPlanSnapshot) -> bool {
    if snapshot.callsign.is_empty() {
        return false;
    }

    if snapshot.is_correlated() {
        return false;
    }

    !snapshot.origin.is_empty() || !snapshot.destination.is_empty()
}
