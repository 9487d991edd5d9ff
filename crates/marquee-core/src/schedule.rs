//! Temporal classification of shows and liberal start-time parsing.
//!
//! Start times are persisted as text and only given meaning on read. The
//! parser is deliberately liberal about separators and precision so that
//! anything a create-form plausibly submits round-trips.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::{Error, Result, show::Show};

/// Accepted `start_time` formats, tried in order after RFC 3339.
const FORMATS: &[&str] = &[
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%d %H:%M",
  "%Y-%m-%dT%H:%M",
];

/// Parse a stored `start_time` string.
///
/// Accepts RFC 3339 (the offset is normalised to UTC and dropped), date-times
/// with or without seconds (space- or `T`-separated), and a bare date, which
/// is taken as midnight. Surrounding whitespace is ignored.
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
  let trimmed = value.trim();

  if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
    return Ok(dt.naive_utc());
  }
  for fmt in FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
      return Ok(dt);
    }
  }
  if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
    return Ok(d.and_time(NaiveTime::MIN));
  }

  Err(Error::DateParse(value.to_owned()))
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Shows split into past and upcoming relative to a reference instant.
#[derive(Debug, Clone, Serialize)]
pub struct ShowSchedule {
  pub past:     Vec<Show>,
  pub upcoming: Vec<Show>,
}

impl ShowSchedule {
  pub fn past_count(&self) -> usize { self.past.len() }

  pub fn upcoming_count(&self) -> usize { self.upcoming.len() }
}

/// Split `shows` into past and upcoming relative to `now`.
///
/// A show is upcoming when its start time is strictly after `now`; a show
/// starting exactly at `now` is past. An unparsable `start_time` propagates
/// as [`Error::DateParse`] instead of being classified into either bucket.
pub fn classify_shows(
  shows: Vec<Show>,
  now: NaiveDateTime,
) -> Result<ShowSchedule> {
  let mut past = Vec::new();
  let mut upcoming = Vec::new();

  for show in shows {
    if parse_start_time(&show.start_time)? > now {
      upcoming.push(show);
    } else {
      past.push(show);
    }
  }

  Ok(ShowSchedule { past, upcoming })
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  fn show(start_time: &str) -> Show {
    Show {
      show_id:    Uuid::new_v4(),
      artist_id:  Uuid::new_v4(),
      venue_id:   Uuid::new_v4(),
      start_time: start_time.into(),
    }
  }

  fn at(s: &str) -> NaiveDateTime {
    parse_start_time(s).unwrap()
  }

  // ── Parsing ───────────────────────────────────────────────────────────────

  #[test]
  fn parses_rfc3339() {
    assert_eq!(at("2024-06-03T20:00:00Z"), at("2024-06-03 20:00:00"));
    // Offsets normalise to UTC.
    assert_eq!(at("2024-06-03T20:00:00+02:00"), at("2024-06-03 18:00:00"));
  }

  #[test]
  fn parses_without_seconds_and_with_t_separator() {
    assert_eq!(at("2024-06-03 20:00"), at("2024-06-03T20:00:00"));
  }

  #[test]
  fn parses_bare_date_as_midnight() {
    assert_eq!(at("2024-06-03"), at("2024-06-03 00:00:00"));
  }

  #[test]
  fn trims_whitespace() {
    assert_eq!(at("  2024-06-03 20:00  "), at("2024-06-03 20:00"));
  }

  #[test]
  fn rejects_garbage() {
    let err = parse_start_time("next tuesday-ish").unwrap_err();
    assert!(matches!(err, Error::DateParse(_)));
  }

  // ── Classification ────────────────────────────────────────────────────────

  #[test]
  fn splits_around_the_reference_instant() {
    let now = at("2024-01-01 00:00");
    let schedule = classify_shows(
      vec![show("2023-12-31T23:59:00"), show("2024-01-01T00:01:00")],
      now,
    )
    .unwrap();

    assert_eq!(schedule.past_count(), 1);
    assert_eq!(schedule.upcoming_count(), 1);
    assert_eq!(schedule.past[0].start_time, "2023-12-31T23:59:00");
    assert_eq!(schedule.upcoming[0].start_time, "2024-01-01T00:01:00");
  }

  #[test]
  fn a_show_starting_exactly_now_is_past() {
    let now = at("2024-01-01 00:00");
    let schedule = classify_shows(vec![show("2024-01-01 00:00")], now).unwrap();
    assert_eq!(schedule.past_count(), 1);
    assert_eq!(schedule.upcoming_count(), 0);
  }

  #[test]
  fn counts_always_match_list_lengths() {
    let now = at("2024-01-01 00:00");
    let shows: Vec<_> =
      (1..=6).map(|m| show(&format!("2024-0{m}-01 12:00"))).collect();
    let schedule = classify_shows(shows, now).unwrap();
    assert_eq!(schedule.past_count(), schedule.past.len());
    assert_eq!(schedule.upcoming_count(), schedule.upcoming.len());
    assert_eq!(schedule.past_count() + schedule.upcoming_count(), 6);
  }

  #[test]
  fn unparsable_start_time_propagates() {
    let now = at("2024-01-01 00:00");
    let err = classify_shows(vec![show("not a date")], now).unwrap_err();
    assert!(matches!(err, Error::DateParse(_)));
  }
}
