//! Error type for `marquee-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] marquee_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),
}

/// Collapse into the domain taxonomy. Database and column-decoding failures
/// surface as constraint violations; domain errors pass through untouched.
impl From<Error> for marquee_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(core) => core,
      Error::Database(db) => marquee_core::Error::Constraint(db.to_string()),
      Error::Json(json) => marquee_core::Error::Constraint(json.to_string()),
      Error::Uuid(uuid) => marquee_core::Error::Constraint(uuid.to_string()),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
