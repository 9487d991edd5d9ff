//! Handlers for `/shows` routes.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/shows` | all shows with venue/artist names resolved |
//! | `GET`  | `/shows/create` | blank form model |
//! | `POST` | `/shows/create` | form: artist_id, venue_id, start_time |
//!
//! Shows have no edit or delete routes: rows persist until cascade-deleted
//! with their parent venue or artist.

use std::{collections::HashMap, sync::Arc};

use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use marquee_core::{
  Error as DomainError,
  show::{NewShow, Show},
  store::BookingStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Flash, error::ApiError, store_err};

// ─── List ─────────────────────────────────────────────────────────────────────

/// A show listing with its venue and artist names resolved.
#[derive(Debug, Serialize)]
pub struct ShowListing {
  pub show_id:     Uuid,
  pub venue_id:    Uuid,
  pub venue_name:  String,
  pub artist_id:   Uuid,
  pub artist_name: String,
  pub start_time:  String,
}

/// `GET /shows` — names are joined in memory from the full venue and artist
/// listings; three queries total regardless of show count.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ShowListing>>, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let shows = store.list_shows().await.map_err(store_err)?;
  let venues = store.list_venues().await.map_err(store_err)?;
  let artists = store.list_artists().await.map_err(store_err)?;

  let venue_names: HashMap<Uuid, String> =
    venues.into_iter().map(|v| (v.venue_id, v.name)).collect();
  let artist_names: HashMap<Uuid, String> =
    artists.into_iter().map(|a| (a.artist_id, a.name)).collect();

  let listings = shows
    .into_iter()
    .map(|show: Show| ShowListing {
      venue_name:  venue_names.get(&show.venue_id).cloned().unwrap_or_default(),
      artist_name: artist_names
        .get(&show.artist_id)
        .cloned()
        .unwrap_or_default(),
      show_id:     show.show_id,
      venue_id:    show.venue_id,
      artist_id:   show.artist_id,
      start_time:  show.start_time,
    })
    .collect();

  Ok(Json(listings))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Form fields for creating a show.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShowForm {
  pub artist_id:  Option<Uuid>,
  pub venue_id:   Option<Uuid>,
  #[serde(default)]
  pub start_time: String,
}

/// `GET /shows/create` — a blank form model for the rendering boundary.
pub async fn create_form() -> Json<ShowForm> { Json(ShowForm::default()) }

/// `POST /shows/create` — both foreign keys must reference existing rows.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Form(form): Form<ShowForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookingStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  let artist_id = form
    .artist_id
    .ok_or_else(|| ApiError::BadRequest("artist_id is required".into()))?;
  let venue_id = form
    .venue_id
    .ok_or_else(|| ApiError::BadRequest("venue_id is required".into()))?;

  let input = NewShow {
    artist_id,
    venue_id,
    start_time: form.start_time,
  };

  let show = store.add_show(input).await.map_err(|e| {
    ApiError::failed(
      "An error occurred. Show could not be listed.",
      DomainError::from(e),
    )
  })?;

  tracing::info!(show_id = %show.show_id, "show created");
  Ok((
    StatusCode::CREATED,
    Json(Flash {
      message: "Show was successfully listed!".into(),
      data:    show,
    }),
  ))
}
