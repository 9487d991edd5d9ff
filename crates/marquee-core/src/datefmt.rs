//! Human-readable date-time formatting for the rendering boundary.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::{Result, schedule::parse_start_time};

/// Rendering style accepted by [`format_datetime`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
  /// "Monday June, 3, 2024 at 8:00PM"
  Full,
  /// "Mon Jun, 03, 2024 8:00PM"
  #[default]
  Medium,
}

/// Format a stored date-time string for display. Month and weekday names are
/// English. Fails only if `value` does not parse.
pub fn format_datetime(value: &str, style: DateStyle) -> Result<String> {
  let dt = parse_start_time(value)?;
  Ok(match style {
    DateStyle::Full => format!(
      "{} {}, {}, {} at {}",
      dt.format("%A"),
      dt.format("%B"),
      dt.day(),
      dt.year(),
      clock(&dt),
    ),
    DateStyle::Medium => format!(
      "{} {}, {:02}, {} {}",
      dt.format("%a"),
      dt.format("%b"),
      dt.day(),
      dt.year(),
      clock(&dt),
    ),
  })
}

/// 12-hour clock with an AM/PM suffix and no zero-padded hour.
fn clock(dt: &NaiveDateTime) -> String {
  let (pm, hour) = dt.hour12();
  format!("{}:{:02}{}", hour, dt.minute(), if pm { "PM" } else { "AM" })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn full_style() {
    assert_eq!(
      format_datetime("2024-06-03 20:00:00", DateStyle::Full).unwrap(),
      "Monday June, 3, 2024 at 8:00PM",
    );
  }

  #[test]
  fn medium_style() {
    assert_eq!(
      format_datetime("2024-06-03 20:00:00", DateStyle::Medium).unwrap(),
      "Mon Jun, 03, 2024 8:00PM",
    );
  }

  #[test]
  fn morning_hours_render_am_without_padding() {
    assert_eq!(
      format_datetime("2024-06-03 09:05:00", DateStyle::Full).unwrap(),
      "Monday June, 3, 2024 at 9:05AM",
    );
  }

  #[test]
  fn midnight_renders_as_twelve_am() {
    assert_eq!(
      format_datetime("2024-06-03", DateStyle::Medium).unwrap(),
      "Mon Jun, 03, 2024 12:00AM",
    );
  }

  #[test]
  fn default_style_is_medium() {
    assert_eq!(DateStyle::default(), DateStyle::Medium);
  }

  #[test]
  fn unparsable_value_errors() {
    assert!(format_datetime("soon", DateStyle::Full).is_err());
  }
}
