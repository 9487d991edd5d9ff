//! Error types for `marquee-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("venue not found: {0}")]
  VenueNotFound(Uuid),

  #[error("artist not found: {0}")]
  ArtistNotFound(Uuid),

  #[error("show not found: {0}")]
  ShowNotFound(Uuid),

  #[error("{entity} is missing required field {field:?}")]
  MissingField {
    entity: &'static str,
    field:  &'static str,
  },

  #[error("{entity} field {field:?} is invalid: {reason}")]
  InvalidField {
    entity: &'static str,
    field:  &'static str,
    reason: String,
  },

  /// Store-level rejection (NOT NULL, foreign key, or I/O failure).
  #[error("constraint violation: {0}")]
  Constraint(String),

  #[error("unparsable date-time: {0:?}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
