//! Handlers for `/venues` routes.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/venues` | venues grouped by (city, state) area |
//! | `POST`   | `/venues/search` | form field `search_term` |
//! | `GET`    | `/venues/{id}` | detail + past/upcoming shows; 404 on miss |
//! | `GET`    | `/venues/create` | blank form model |
//! | `POST`   | `/venues/create` | create from form fields |
//! | `DELETE` | `/venues/{id}` | cascade-deletes the venue's shows |
//! | `GET`    | `/venues/{id}/edit` | current record for form prefill |
//! | `POST`   | `/venues/{id}/edit` | rewrite the editable fields |

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
  area::{Area, group_by_area},
  schedule::classify_shows,
  show::Show,
  store::BookingStore,
  venue::{NewVenue, Venue, VenueEdit},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Flash, SearchForm, SearchResults, error::ApiError, split_genres, store_err,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /venues` — all venues grouped into areas, first-seen order.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Area>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let venues = store.list_venues().await.map_err(store_err)?;
  Ok(Json(group_by_area(venues)))
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// `POST /venues/search` — case-insensitive substring match on the name.
pub async fn search<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Venue>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let data = store
    .search_venues(&form.search_term)
    .await
    .map_err(store_err)?;
  Ok(Json(SearchResults {
    count:       data.len(),
    data,
    search_term: form.search_term,
  }))
}

// ─── Detail ───────────────────────────────────────────────────────────────────

/// View-model for a venue detail page: the record plus its shows classified
/// against the current time.
#[derive(Debug, Serialize)]
pub struct VenuePage {
  #[serde(flatten)]
  pub venue:                Venue,
  pub past_shows:           Vec<Show>,
  pub upcoming_shows:       Vec<Show>,
  pub past_shows_count:     usize,
  pub upcoming_shows_count: usize,
}

/// `GET /venues/{id}` — 404 if the venue does not exist.
pub async fn detail<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<VenuePage>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let venue = store
    .get_venue(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("venue {id} not found")))?;

  let shows = store.shows_for_venue(id).await.map_err(store_err)?;
  let schedule =
    classify_shows(shows, Utc::now().naive_utc()).map_err(ApiError::Store)?;

  Ok(Json(VenuePage {
    venue,
    past_shows_count: schedule.past_count(),
    upcoming_shows_count: schedule.upcoming_count(),
    past_shows: schedule.past,
    upcoming_shows: schedule.upcoming,
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Form fields for creating and editing venues. `genres` is accepted as a
/// comma-separated list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VenueForm {
  #[serde(default)]
  pub name:          String,
  #[serde(default)]
  pub city:          String,
  #[serde(default)]
  pub state:         String,
  #[serde(default)]
  pub address:       String,
  pub phone:         Option<String>,
  #[serde(default)]
  pub genres:        String,
  pub facebook_link: Option<String>,
}

/// `GET /venues/create` — a blank form model for the rendering boundary.
pub async fn create_form() -> Json<VenueForm> { Json(VenueForm::default()) }

/// `POST /venues/create`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<VenueForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let name = form.name.clone();
  let input = NewVenue {
    name:          form.name,
    city:          form.city,
    state:         form.state,
    address:       form.address,
    phone:         form.phone,
    genres:        split_genres(&form.genres),
    image_link:    None,
    facebook_link: form.facebook_link,
  };

  let venue = store.add_venue(input).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Venue {name} could not be listed."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(venue_id = %venue.venue_id, "venue created");
  Ok((
    StatusCode::CREATED,
    Json(Flash {
      message: format!("Venue {} was successfully listed!", venue.name),
      data:    venue,
    }),
  ))
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// `GET /venues/{id}/edit` — the current record for form prefill.
pub async fn edit_form<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Venue>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let venue = store
    .get_venue(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("venue {id} not found")))?;
  Ok(Json(venue))
}

/// `POST /venues/{id}/edit` — rewrites the editable fields. `image_link` is
/// not form-editable and is left unchanged.
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Form(form): Form<VenueForm>,
) -> Result<Json<Flash<Venue>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let name = form.name.clone();
  let edit = VenueEdit {
    name:          form.name,
    city:          form.city,
    state:         form.state,
    address:       form.address,
    phone:         form.phone,
    genres:        split_genres(&form.genres),
    facebook_link: form.facebook_link,
  };

  let venue = store.update_venue(id, edit).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Venue {name} could not be edited."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(venue_id = %venue.venue_id, "venue edited");
  Ok(Json(Flash {
    message: format!("Venue {} was successfully edited!", venue.name),
    data:    venue,
  }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /venues/{id}` — removes the venue and its shows in one
/// transaction. The failure message references the id only; the record may
/// already be gone.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Flash<Uuid>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  store.delete_venue(id).await.map_err(|e| {
    ApiError::failed(
      format!("An error occurred. Venue {id} could not be deleted."),
      DomainError::from(e),
    )
  })?;

  tracing::info!(venue_id = %id, "venue deleted");
  Ok(Json(Flash {
    message: "Venue was successfully deleted!".into(),
    data:    id,
  }))
}
