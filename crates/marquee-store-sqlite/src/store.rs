//! [`SqliteStore`] — the SQLite implementation of [`BookingStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use marquee_core::{
  artist::{Artist, ArtistEdit, NewArtist},
  show::{NewShow, Show},
  store::BookingStore,
  venue::{NewVenue, Venue, VenueEdit},
};

use crate::{
  Error, Result,
  encode::{RawArtist, RawShow, RawVenue, encode_genres, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Marquee booking store backed by a single SQLite file.
///
/// Clones share the underlying connection handle.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── BookingStore impl ───────────────────────────────────────────────────────

impl BookingStore for SqliteStore {
  type Error = Error;

  // ── Venues ────────────────────────────────────────────────────────────────

  async fn add_venue(&self, input: NewVenue) -> Result<Venue> {
    input.validate()?;

    let venue = Venue {
      venue_id:      Uuid::new_v4(),
      name:          input.name,
      city:          input.city,
      state:         input.state,
      address:       input.address,
      phone:         input.phone,
      genres:        input.genres,
      image_link:    input.image_link,
      facebook_link: input.facebook_link,
    };

    let id_str     = encode_uuid(venue.venue_id);
    let genres_str = encode_genres(&venue.genres)?;
    let row        = venue.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO venues (
             venue_id, name, city, state, address,
             phone, genres, image_link, facebook_link
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            id_str,
            row.name,
            row.city,
            row.state,
            row.address,
            row.phone,
            genres_str,
            row.image_link,
            row.facebook_link,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(venue)
  }

  async fn get_venue(&self, id: Uuid) -> Result<Option<Venue>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawVenue> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT venue_id, name, city, state, address,
                      phone, genres, image_link, facebook_link
               FROM venues WHERE venue_id = ?1",
              rusqlite::params![id_str],
              |row| RawVenue::from_row(row),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawVenue::into_venue).transpose()
  }

  async fn list_venues(&self) -> Result<Vec<Venue>> {
    let raws: Vec<RawVenue> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT venue_id, name, city, state, address,
                  phone, genres, image_link, facebook_link
           FROM venues",
        )?;
        let rows = stmt
          .query_map([], |row| RawVenue::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenue::into_venue).collect()
  }

  async fn update_venue(&self, id: Uuid, edit: VenueEdit) -> Result<Venue> {
    edit.validate()?;

    let id_str     = encode_uuid(id);
    let genres_str = encode_genres(&edit.genres)?;
    let VenueEdit {
      name,
      city,
      state,
      address,
      phone,
      facebook_link,
      ..
    } = edit;

    let changed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE venues
           SET name = ?2, city = ?3, state = ?4, address = ?5,
               phone = ?6, genres = ?7, facebook_link = ?8
           WHERE venue_id = ?1",
          rusqlite::params![
            id_str,
            name,
            city,
            state,
            address,
            phone,
            genres_str,
            facebook_link,
          ],
        )?;
        Ok(n)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(marquee_core::Error::VenueNotFound(id)));
    }

    self
      .get_venue(id)
      .await?
      .ok_or(Error::Core(marquee_core::Error::VenueNotFound(id)))
  }

  async fn delete_venue(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let deleted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM shows WHERE venue_id = ?1",
          rusqlite::params![id_str],
        )?;
        let n = tx.execute(
          "DELETE FROM venues WHERE venue_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(n)
      })
      .await?;

    if deleted == 0 {
      return Err(Error::Core(marquee_core::Error::VenueNotFound(id)));
    }
    Ok(())
  }

  async fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
    // LIKE is case-insensitive for ASCII in SQLite.
    let pattern = format!("%{term}%");

    let raws: Vec<RawVenue> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT venue_id, name, city, state, address,
                  phone, genres, image_link, facebook_link
           FROM venues WHERE name LIKE ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], |row| RawVenue::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenue::into_venue).collect()
  }

  // ── Artists ───────────────────────────────────────────────────────────────

  async fn add_artist(&self, input: NewArtist) -> Result<Artist> {
    input.validate()?;

    let artist = Artist {
      artist_id:     Uuid::new_v4(),
      name:          input.name,
      city:          input.city,
      state:         input.state,
      phone:         input.phone,
      genres:        input.genres,
      image_link:    input.image_link,
      facebook_link: input.facebook_link,
    };

    let id_str     = encode_uuid(artist.artist_id);
    let genres_str = encode_genres(&artist.genres)?;
    let row        = artist.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO artists (
             artist_id, name, city, state,
             phone, genres, image_link, facebook_link
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            row.name,
            row.city,
            row.state,
            row.phone,
            genres_str,
            row.image_link,
            row.facebook_link,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(artist)
  }

  async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawArtist> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT artist_id, name, city, state,
                      phone, genres, image_link, facebook_link
               FROM artists WHERE artist_id = ?1",
              rusqlite::params![id_str],
              |row| RawArtist::from_row(row),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawArtist::into_artist).transpose()
  }

  async fn list_artists(&self) -> Result<Vec<Artist>> {
    let raws: Vec<RawArtist> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT artist_id, name, city, state,
                  phone, genres, image_link, facebook_link
           FROM artists",
        )?;
        let rows = stmt
          .query_map([], |row| RawArtist::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtist::into_artist).collect()
  }

  async fn update_artist(&self, id: Uuid, edit: ArtistEdit) -> Result<Artist> {
    edit.validate()?;

    let id_str     = encode_uuid(id);
    let genres_str = encode_genres(&edit.genres)?;
    let ArtistEdit {
      name,
      city,
      state,
      phone,
      facebook_link,
      ..
    } = edit;

    let changed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE artists
           SET name = ?2, city = ?3, state = ?4,
               phone = ?5, genres = ?6, facebook_link = ?7
           WHERE artist_id = ?1",
          rusqlite::params![
            id_str,
            name,
            city,
            state,
            phone,
            genres_str,
            facebook_link,
          ],
        )?;
        Ok(n)
      })
      .await?;

    if changed == 0 {
      return Err(Error::Core(marquee_core::Error::ArtistNotFound(id)));
    }

    self
      .get_artist(id)
      .await?
      .ok_or(Error::Core(marquee_core::Error::ArtistNotFound(id)))
  }

  async fn delete_artist(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let deleted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM shows WHERE artist_id = ?1",
          rusqlite::params![id_str],
        )?;
        let n = tx.execute(
          "DELETE FROM artists WHERE artist_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(n)
      })
      .await?;

    if deleted == 0 {
      return Err(Error::Core(marquee_core::Error::ArtistNotFound(id)));
    }
    Ok(())
  }

  async fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
    let pattern = format!("%{term}%");

    let raws: Vec<RawArtist> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT artist_id, name, city, state,
                  phone, genres, image_link, facebook_link
           FROM artists WHERE name LIKE ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], |row| RawArtist::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArtist::into_artist).collect()
  }

  // ── Shows ─────────────────────────────────────────────────────────────────

  async fn add_show(&self, input: NewShow) -> Result<Show> {
    input.validate()?;

    let show = Show {
      show_id:    Uuid::new_v4(),
      artist_id:  input.artist_id,
      venue_id:   input.venue_id,
      start_time: input.start_time,
    };

    let show_id_str   = encode_uuid(show.show_id);
    let artist_id_str = encode_uuid(show.artist_id);
    let venue_id_str  = encode_uuid(show.venue_id);
    let start_time    = show.start_time.clone();

    // Both foreign keys are checked inside the same transaction as the
    // insert, so the referenced rows cannot vanish in between.
    let (artist_ok, venue_ok) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let artist_ok: bool = tx
          .query_row(
            "SELECT 1 FROM artists WHERE artist_id = ?1",
            rusqlite::params![artist_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        let venue_ok: bool = tx
          .query_row(
            "SELECT 1 FROM venues WHERE venue_id = ?1",
            rusqlite::params![venue_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if artist_ok && venue_ok {
          tx.execute(
            "INSERT INTO shows (show_id, artist_id, venue_id, start_time)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![show_id_str, artist_id_str, venue_id_str, start_time],
          )?;
        }

        tx.commit()?;
        Ok((artist_ok, venue_ok))
      })
      .await?;

    if !artist_ok {
      return Err(Error::Core(marquee_core::Error::ArtistNotFound(show.artist_id)));
    }
    if !venue_ok {
      return Err(Error::Core(marquee_core::Error::VenueNotFound(show.venue_id)));
    }

    Ok(show)
  }

  async fn get_show(&self, id: Uuid) -> Result<Option<Show>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawShow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT show_id, artist_id, venue_id, start_time
               FROM shows WHERE show_id = ?1",
              rusqlite::params![id_str],
              |row| RawShow::from_row(row),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawShow::into_show).transpose()
  }

  async fn list_shows(&self) -> Result<Vec<Show>> {
    let raws: Vec<RawShow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT show_id, artist_id, venue_id, start_time FROM shows",
        )?;
        let rows = stmt
          .query_map([], |row| RawShow::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShow::into_show).collect()
  }

  async fn shows_for_venue(&self, venue_id: Uuid) -> Result<Vec<Show>> {
    let id_str = encode_uuid(venue_id);

    let raws: Vec<RawShow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT show_id, artist_id, venue_id, start_time
           FROM shows WHERE venue_id = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| RawShow::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShow::into_show).collect()
  }

  async fn shows_for_artist(&self, artist_id: Uuid) -> Result<Vec<Show>> {
    let id_str = encode_uuid(artist_id);

    let raws: Vec<RawShow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT show_id, artist_id, venue_id, start_time
           FROM shows WHERE artist_id = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| RawShow::from_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShow::into_show).collect()
  }
}
