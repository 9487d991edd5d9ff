//! Venue — a physical location hosting shows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, validate};

/// A venue record as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
  pub venue_id:      Uuid,
  pub name:          String,
  pub city:          String,
  /// Two-letter state code, e.g. "CA".
  pub state:         String,
  pub address:       String,
  pub phone:         Option<String>,
  /// Ordered; non-empty at creation time.
  pub genres:        Vec<String>,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

/// Input to [`crate::store::BookingStore::add_venue`].
/// `venue_id` is always assigned by the store; it is not accepted from
/// callers.
#[derive(Debug, Clone, Default)]
pub struct NewVenue {
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub address:       String,
  pub phone:         Option<String>,
  pub genres:        Vec<String>,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

impl NewVenue {
  pub fn validate(&self) -> Result<()> {
    validate::require("venue", "name", &self.name)?;
    validate::require("venue", "city", &self.city)?;
    validate::state_code("venue", &self.state)?;
    validate::require("venue", "address", &self.address)?;
    validate::genres("venue", &self.genres)
  }
}

/// The form-editable fields of a venue. `image_link` is not part of the edit
/// form and is left untouched by updates.
#[derive(Debug, Clone)]
pub struct VenueEdit {
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub address:       String,
  pub phone:         Option<String>,
  pub genres:        Vec<String>,
  pub facebook_link: Option<String>,
}

impl VenueEdit {
  pub fn validate(&self) -> Result<()> {
    validate::require("venue", "name", &self.name)?;
    validate::require("venue", "city", &self.city)?;
    validate::state_code("venue", &self.state)?;
    validate::require("venue", "address", &self.address)?;
    validate::genres("venue", &self.genres)
  }
}
