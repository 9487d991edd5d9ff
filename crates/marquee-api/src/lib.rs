//! JSON view-model API for Marquee.
//!
//! Exposes an axum [`Router`] backed by any
//! [`marquee_core::store::BookingStore`]. Handlers orchestrate the query
//! layer, area aggregation, and show classification, then hand the resulting
//! view-model to the rendering boundary as JSON. Transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = marquee_api::api_router(store.clone());
//! ```

pub mod artists;
pub mod error;
pub mod shows;
pub mod venues;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::StatusCode,
  routing::{get, post},
};
use marquee_core::{Error as DomainError, store::BookingStore};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub use error::ApiError;

// ─── Shared view-model types ─────────────────────────────────────────────────

/// A mutation response: the flashed one-line message plus the affected data.
#[derive(Debug, Serialize)]
pub struct Flash<T> {
  pub message: String,
  pub data:    T,
}

/// Form body for the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
  #[serde(default)]
  pub search_term: String,
}

/// Search response: `count` always equals `data.len()` — both come from the
/// same query, never a separate count.
#[derive(Debug, Serialize)]
pub struct SearchResults<T> {
  pub count:       usize,
  pub data:        Vec<T>,
  pub search_term: String,
}

/// Split a comma-separated form field into the genres list.
pub(crate) fn split_genres(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(|g| g.trim().to_owned())
    .filter(|g| !g.is_empty())
    .collect()
}

/// Convert a backend error into the read-path API error.
pub(crate) fn store_err<E>(e: E) -> ApiError
where
  DomainError: From<E>,
{
  ApiError::Store(DomainError::from(e))
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: BookingStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
  DomainError: From<S::Error>,
{
  Router::new()
    .route("/", get(home))
    // Venues
    .route("/venues", get(venues::list::<S>))
    .route("/venues/search", post(venues::search::<S>))
    .route(
      "/venues/create",
      get(venues::create_form).post(venues::create::<S>),
    )
    .route(
      "/venues/{id}",
      get(venues::detail::<S>).delete(venues::remove::<S>),
    )
    .route(
      "/venues/{id}/edit",
      get(venues::edit_form::<S>).post(venues::edit::<S>),
    )
    // Artists
    .route("/artists", get(artists::list::<S>))
    .route("/artists/search", post(artists::search::<S>))
    .route(
      "/artists/create",
      get(artists::create_form).post(artists::create::<S>),
    )
    .route(
      "/artists/{id}",
      get(artists::detail::<S>).delete(artists::remove::<S>),
    )
    .route(
      "/artists/{id}/edit",
      get(artists::edit_form::<S>).post(artists::edit::<S>),
    )
    // Shows
    .route("/shows", get(shows::list::<S>))
    .route(
      "/shows/create",
      get(shows::create_form).post(shows::create::<S>),
    )
    .fallback(not_found)
    .with_state(store)
}

/// `GET /` — the home view-model: entry points into the site.
async fn home() -> Json<serde_json::Value> {
  Json(json!({
    "venues": "/venues",
    "artists": "/artists",
    "shows": "/shows",
  }))
}

/// Fallback for unknown routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
