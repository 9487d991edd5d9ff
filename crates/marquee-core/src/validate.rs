//! Required-field validation shared by the entity input types.

use crate::{Error, Result};

/// Reject a blank required text field.
pub fn require(
  entity: &'static str,
  field: &'static str,
  value: &str,
) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::MissingField { entity, field });
  }
  Ok(())
}

/// A state must be exactly two ASCII letters, e.g. "CA".
pub fn state_code(entity: &'static str, value: &str) -> Result<()> {
  require(entity, "state", value)?;
  if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
    return Err(Error::InvalidField {
      entity,
      field: "state",
      reason: format!("expected a 2-letter code, got {value:?}"),
    });
  }
  Ok(())
}

/// Genres must contain at least one non-blank entry.
pub fn genres(entity: &'static str, genres: &[String]) -> Result<()> {
  if genres.iter().all(|g| g.trim().is_empty()) {
    return Err(Error::MissingField {
      entity,
      field: "genres",
    });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn require_rejects_blank() {
    assert!(require("venue", "name", "").is_err());
    assert!(require("venue", "name", "   ").is_err());
    assert!(require("venue", "name", "Blue Note").is_ok());
  }

  #[test]
  fn state_code_must_be_two_letters() {
    assert!(state_code("venue", "CA").is_ok());
    assert!(state_code("venue", "C").is_err());
    assert!(state_code("venue", "CAL").is_err());
    assert!(state_code("venue", "C4").is_err());
    assert!(state_code("venue", "").is_err());
  }

  #[test]
  fn genres_must_have_an_entry() {
    assert!(genres("artist", &[]).is_err());
    assert!(genres("artist", &["".into()]).is_err());
    assert!(genres("artist", &["Jazz".into()]).is_ok());
  }
}
