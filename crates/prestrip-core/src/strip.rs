use crate::snapshot::FlightPlanSnapshot;
use std::fmt;

/// An immutable, fully formatted strip. Built once at acceptance time and
/// handed to the sink as-is; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripPayload {
    callsign: String,
    text: String,
}

impl StripPayload {
    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StripPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a snapshot into the fixed strip layout.
///
/// The layout is a stable byte-level contract with downstream renderers:
/// labels and separators are always present, missing fields collapse to
/// empty strings. Total, never fails.
pub fn format_strip(snapshot: &FlightPlanSnapshot) -> StripPayload {
    let mut text = String::with_capacity(256);
    text.push_str("================ FLIGHT STRIP ================\n");
    text.push_str(&format!(
        "CS: {}   DEP: {}   ARR: {}\n",
        snapshot.callsign, snapshot.origin, snapshot.destination
    ));
    text.push_str(&format!("ROUTE: {}\n", snapshot.route));
    text.push_str(&format!(
        "FL: {}   EOBT: {}   WTC: {}\n",
        snapshot.cruise_level, snapshot.departure_time, snapshot.wake_category
    ));
    text.push_str(&format!("EQUIP: {}\n", snapshot.equipment));
    text.push_str("==============================================\n");

    StripPayload {
        callsign: snapshot.callsign.clone(),
        text,
    }
}
