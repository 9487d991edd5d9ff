//! Handlers for `/artists` routes.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/artists` | all artists |
//! | `POST`   | `/artists/search` | form field `search_term` |
//! | `GET`    | `/artists/{id}` | detail + past/upcoming shows; 404 on miss |
//! | `GET`    | `/artists/create` | blank form model |
//! | `POST`   | `/artists/create` | create from form fields |
//! | `DELETE` | `/artists/{id}` | cascade-deletes the artist's shows |
//! | `GET`    | `/artists/{id}/edit` | current record for form prefill |
//! | `POST`   | `/artists/{id}/edit` | rewrite the editable fields |

use std::sync::Arc;

use axum::{
  Form, Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use marquee_core::{
  Error as DomainError,
  artist::{Artist, ArtistEdit, NewArtist},
  schedule::classify_shows,
  show::Show,
  store::BookingStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Flash, SearchForm, SearchResults, error::ApiError, split_genres, store_err,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /artists`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let artists = store.list_artists().await.map_err(store_err)?;
  Ok(Json(artists))
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// `POST /artists/search` — case-insensitive substring match on the name.
pub async fn search<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Artist>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let data = store
    .search_artists(&form.search_term)
    .await
    .map_err(store_err)?;
  Ok(Json(SearchResults {
    count:       data.len(),
    data,
    search_term: form.search_term,
  }))
}

// ─── Detail ───────────────────────────────────────────────────────────────────

/// View-model for an artist detail page.
#[derive(Debug, Serialize)]
pub struct ArtistPage {
  #[serde(flatten)]
  pub artist:               Artist,
  pub past_shows:           Vec<Show>,
  pub upcoming_shows:       Vec<Show>,
  pub past_shows_count:     usize,
  pub upcoming_shows_count: usize,
}

/// `GET /artists/{id}` — 404 if the artist does not exist.
pub async fn detail<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ArtistPage>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let artist = store
    .get_artist(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("artist {id} not found")))?;

  let shows = store.shows_for_artist(id).await.map_err(store_err)?;
  let schedule =
    classify_shows(shows, Utc::now().naive_utc()).map_err(ApiError::Store)?;

  Ok(Json(ArtistPage {
    artist,
    past_shows_count: schedule.past_count(),
    upcoming_shows_count: schedule.upcoming_count(),
    past_shows: schedule.past,
    upcoming_shows: schedule.upcoming,
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Form fields for creating and editing artists. `genres` is accepted as a
/// comma-separated list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ArtistForm {
  #[serde(default)]
  pub name:          String,
  #[serde(default)]
  pub city:          String,
  #[serde(default)]
  pub state:         String,
  pub phone:         Option<String>,
  #[serde(default)]
  pub genres:        String,
  pub facebook_link: Option<String>,
}

/// `GET /artists/create` — a blank form model for the rendering boundary.
pub async fn create_form() -> Json<ArtistForm> { Json(ArtistForm::default()) }

/// `POST /artists/create`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<ArtistForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let name = form.name.clone();
  let input = NewArtist {
    name:          form.name,
    city:          form.city,
    state:         form.state,
    phone:         form.phone,
    genres:        split_genres(&form.genres),
    image_link:    None,
    facebook_link: form.facebook_link,
  };

  let artist = store.add_artist(input).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Artist {name} could not be listed."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(artist_id = %artist.artist_id, "artist created");
  Ok((
    StatusCode::CREATED,
    Json(Flash {
      message: format!("Artist {} was successfully listed!", artist.name),
      data:    artist,
    }),
  ))
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// `GET /artists/{id}/edit` — the current record for form prefill.
pub async fn edit_form<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Artist>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let artist = store
    .get_artist(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("artist {id} not found")))?;
  Ok(Json(artist))
}

/// `POST /artists/{id}/edit` — rewrites the editable fields. `image_link` is
/// not form-editable and is left unchanged.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Form(form): Form<ArtistForm>,
) -> Result<Json<Flash<Artist>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let name = form.name.clone();
  let edit = ArtistEdit {
    name:          form.name,
    city:          form.city,
    state:         form.state,
    phone:         form.phone,
    genres:        split_genres(&form.genres),
    facebook_link: form.facebook_link,
  };

  let artist = store.update_artist(id, edit).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Artist {name} could not be edited."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(artist_id = %artist.artist_id, "artist edited");
  Ok(Json(Flash {
    message: format!("Artist {} was successfully edited!", artist.name),
    data:    artist,
  }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /artists/{id}` — removes the artist and its shows in one
/// transaction, mirroring the venue cascade. The failure message references
/// the id only.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Flash<Uuid>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  store.delete_artist(id).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Artist {id} could not be deleted."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(artist_id = %id, "artist deleted");
  Ok(Json(Flash {
    message: "Artist was successfully deleted!".into(),
    data:    id,
  }))
}
