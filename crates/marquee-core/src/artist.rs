//! Artist — a performer who plays shows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, validate};

/// An artist record as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
  pub artist_id:     Uuid,
  pub name:          String,
  pub city:          String,
  /// Two-letter state code, e.g. "NY".
  pub state:         String,
  pub phone:         Option<String>,
  pub genres:        Vec<String>,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

/// Input to [`crate::store::BookingStore::add_artist`].
/// `artist_id` is always assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewArtist {
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub phone:         Option<String>,
  pub genres:        Vec<String>,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

impl NewArtist {
  pub fn validate(&self) -> Result<()> {
    validate::require("artist", "name", &self.name)?;
    validate::require("artist", "city", &self.city)?;
    validate::state_code("artist", &self.state)?;
    validate::genres("artist", &self.genres)
  }
}

/// The form-editable fields of an artist; `image_link` is left untouched.
#[derive(Debug, Clone)]
pub struct ArtistEdit {
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub phone:         Option<String>,
  pub genres:        Vec<String>,
  pub facebook_link: Option<String>,
}

impl ArtistEdit {
  pub fn validate(&self) -> Result<()> {
    validate::require("artist", "name", &self.name)?;
    validate::require("artist", "city", &self.city)?;
    validate::state_code("artist", &self.state)?;
    validate::genres("artist", &self.genres)
  }
}
