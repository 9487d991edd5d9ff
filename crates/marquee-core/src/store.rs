//! The `BookingStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `marquee-store-sqlite`).
//! Higher layers (`marquee-api`, `marquee-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  artist::{Artist, ArtistEdit, NewArtist},
  show::{NewShow, Show},
  venue::{NewVenue, Venue, VenueEdit},
};

/// Abstraction over a Marquee booking store backend.
///
/// The store is the exclusive owner of persisted venue/artist/show rows.
/// Mutations run atomically: on any failure mid-operation, everything since
/// the operation started is discarded.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BookingStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Venues ────────────────────────────────────────────────────────────

  /// Create and persist a new venue; the store assigns its id.
  fn add_venue(
    &self,
    input: NewVenue,
  ) -> impl Future<Output = Result<Venue, Self::Error>> + Send + '_;

  /// Retrieve a venue by id. Returns `None` if not found.
  fn get_venue(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Venue>, Self::Error>> + Send + '_;

  /// List all venues. Ordering is not guaranteed stable.
  fn list_venues(
    &self,
  ) -> impl Future<Output = Result<Vec<Venue>, Self::Error>> + Send + '_;

  /// Rewrite a venue's editable fields and return the updated record.
  /// Fails if the id is absent. There is no concurrent-edit detection;
  /// the last write wins.
  fn update_venue(
    &self,
    id: Uuid,
    edit: VenueEdit,
  ) -> impl Future<Output = Result<Venue, Self::Error>> + Send + '_;

  /// Delete a venue and all of its shows in a single transaction.
  /// Fails if the id is absent.
  fn delete_venue(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Case-insensitive substring match against venue names.
  fn search_venues<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Venue>, Self::Error>> + Send + 'a;

  // ── Artists ───────────────────────────────────────────────────────────

  /// Create and persist a new artist; the store assigns its id.
  fn add_artist(
    &self,
    input: NewArtist,
  ) -> impl Future<Output = Result<Artist, Self::Error>> + Send + '_;

  /// Retrieve an artist by id. Returns `None` if not found.
  fn get_artist(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Artist>, Self::Error>> + Send + '_;

  /// List all artists.
  fn list_artists(
    &self,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + '_;

  /// Rewrite an artist's editable fields and return the updated record.
  fn update_artist(
    &self,
    id: Uuid,
    edit: ArtistEdit,
  ) -> impl Future<Output = Result<Artist, Self::Error>> + Send + '_;

  /// Delete an artist and all of its shows in a single transaction.
  fn delete_artist(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Case-insensitive substring match against artist names.
  fn search_artists<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + 'a;

  // ── Shows ─────────────────────────────────────────────────────────────

  /// Create and persist a new show; the store assigns its id.
  ///
  /// Both foreign keys are checked: fails with a typed not-found error if
  /// `artist_id` or `venue_id` does not reference an existing row.
  fn add_show(
    &self,
    input: NewShow,
  ) -> impl Future<Output = Result<Show, Self::Error>> + Send + '_;

  /// Retrieve a show by id. Returns `None` if not found.
  fn get_show(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Show>, Self::Error>> + Send + '_;

  /// List all shows.
  fn list_shows(
    &self,
  ) -> impl Future<Output = Result<Vec<Show>, Self::Error>> + Send + '_;

  /// All shows at the given venue.
  fn shows_for_venue(
    &self,
    venue_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Show>, Self::Error>> + Send + '_;

  /// All shows by the given artist.
  fn shows_for_artist(
    &self,
    artist_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Show>, Self::Error>> + Send + '_;
}
