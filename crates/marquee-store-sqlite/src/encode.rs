//! Conversions between the domain types and their column representations.
//!
//! UUIDs are stored as hyphenated lowercase strings; genres as a compact JSON
//! array. `start_time` is stored verbatim and parsed on read by the temporal
//! classifier, never here.

use marquee_core::{artist::Artist, show::Show, venue::Venue};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Genres ──────────────────────────────────────────────────────────────────

pub fn encode_genres(genres: &[String]) -> Result<String> {
  Ok(serde_json::to_string(genres)?)
}

pub fn decode_genres(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `venues` row.
pub struct RawVenue {
  pub venue_id:      String,
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub address:       String,
  pub phone:         Option<String>,
  pub genres:        String,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

impl RawVenue {
  /// Column order must match the SELECT lists in `store.rs`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      venue_id:      row.get(0)?,
      name:          row.get(1)?,
      city:          row.get(2)?,
      state:         row.get(3)?,
      address:       row.get(4)?,
      phone:         row.get(5)?,
      genres:        row.get(6)?,
      image_link:    row.get(7)?,
      facebook_link: row.get(8)?,
    })
  }

  pub fn into_venue(self) -> Result<Venue> {
    Ok(Venue {
      venue_id:      decode_uuid(&self.venue_id)?,
      name:          self.name,
      city:          self.city,
      state:         self.state,
      address:       self.address,
      phone:         self.phone,
      genres:        decode_genres(&self.genres)?,
      image_link:    self.image_link,
      facebook_link: self.facebook_link,
    })
  }
}

/// Raw strings read directly from an `artists` row.
pub struct RawArtist {
  pub artist_id:     String,
  pub name:          String,
  pub city:          String,
  pub state:         String,
  pub phone:         Option<String>,
  pub genres:        String,
  pub image_link:    Option<String>,
  pub facebook_link: Option<String>,
}

impl RawArtist {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      artist_id:     row.get(0)?,
      name:          row.get(1)?,
      city:          row.get(2)?,
      state:         row.get(3)?,
      phone:         row.get(4)?,
      genres:        row.get(5)?,
      image_link:    row.get(6)?,
      facebook_link: row.get(7)?,
    })
  }

  pub fn into_artist(self) -> Result<Artist> {
    Ok(Artist {
      artist_id:     decode_uuid(&self.artist_id)?,
      name:          self.name,
      city:          self.city,
      state:         self.state,
      phone:         self.phone,
      genres:        decode_genres(&self.genres)?,
      image_link:    self.image_link,
      facebook_link: self.facebook_link,
    })
  }
}

/// Raw strings read directly from a `shows` row.
pub struct RawShow {
  pub show_id:    String,
  pub artist_id:  String,
  pub venue_id:   String,
  pub start_time: String,
}

impl RawShow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      show_id:    row.get(0)?,
      artist_id:  row.get(1)?,
      venue_id:   row.get(2)?,
      start_time: row.get(3)?,
    })
  }

  pub fn into_show(self) -> Result<Show> {
    Ok(Show {
      show_id:    decode_uuid(&self.show_id)?,
      artist_id:  decode_uuid(&self.artist_id)?,
      venue_id:   decode_uuid(&self.venue_id)?,
      start_time: self.start_time,
    })
  }
}
