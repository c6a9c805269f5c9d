//! Timestamp parsing for the script's "generated at" line.

use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse RFC 3339 (keeping its own wall-clock time) or a zone-less ISO timestamp.
pub fn parse_generated_at(s: &str) -> Option<NaiveDateTime> {
  let s = s.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.naive_local());
  }
  NAIVE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
