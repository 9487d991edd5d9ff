//! Show — a scheduled event linking one artist to one venue at a start time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, schedule};

/// A show record. `start_time` is stored as text and parsed on read; see
/// [`crate::schedule::parse_start_time`] for the accepted formats.
///
/// Shows are never edited or deleted on their own — rows persist until they
/// are cascade-deleted with their parent venue or artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
  pub show_id:    Uuid,
  pub artist_id:  Uuid,
  pub venue_id:   Uuid,
  pub start_time: String,
}

/// Input to [`crate::store::BookingStore::add_show`].
/// `show_id` is always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShow {
  pub artist_id:  Uuid,
  pub venue_id:   Uuid,
  pub start_time: String,
}

impl NewShow {
  /// Rejects a `start_time` that would not survive the read path.
  pub fn validate(&self) -> Result<()> {
    if self.start_time.trim().is_empty() {
      return Err(Error::MissingField {
        entity: "show",
        field:  "start_time",
      });
    }
    schedule::parse_start_time(&self.start_time)?;
    Ok(())
  }
}
