//! `SqliteStore` integration tests, run against an in-memory database.

use marquee_core::{
  Error as CoreError,
  artist::{ArtistEdit, NewArtist},
  show::NewShow,
  store::BookingStore,
  venue::{NewVenue, VenueEdit},
};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
  NewVenue {
    name: name.into(),
    city: city.into(),
    state: state.into(),
    address: "1 Main St".into(),
    genres: vec!["Jazz".into(), "Blues".into()],
    ..Default::default()
  }
}

fn new_artist(name: &str, city: &str, state: &str) -> NewArtist {
  NewArtist {
    name: name.into(),
    city: city.into(),
    state: state.into(),
    genres: vec!["Rock".into()],
    ..Default::default()
  }
}

// ─── Venues ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_venue() {
  let s = store().await;

  let venue = s
    .add_venue(new_venue("The Fillmore", "San Francisco", "CA"))
    .await
    .unwrap();

  let fetched = s.get_venue(venue.venue_id).await.unwrap().unwrap();
  assert_eq!(fetched.venue_id, venue.venue_id);
  assert_eq!(fetched.name, "The Fillmore");
  assert_eq!(fetched.genres, vec!["Jazz", "Blues"]);
  assert_eq!(fetched.phone, None);
}

#[tokio::test]
async fn get_venue_missing_returns_none() {
  let s = store().await;
  assert!(s.get_venue(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_venues_returns_inserted_set_with_unique_ids() {
  let s = store().await;
  let v1 = s.add_venue(new_venue("A", "SF", "CA")).await.unwrap();
  let v2 = s.add_venue(new_venue("B", "LA", "CA")).await.unwrap();
  let v3 = s.add_venue(new_venue("C", "NYC", "NY")).await.unwrap();

  let mut inserted = vec![v1.venue_id, v2.venue_id, v3.venue_id];
  let mut listed: Vec<_> = s
    .list_venues()
    .await
    .unwrap()
    .into_iter()
    .map(|v| v.venue_id)
    .collect();
  inserted.sort();
  listed.sort();

  assert_eq!(listed, inserted);
  inserted.dedup();
  assert_eq!(inserted.len(), 3);
}

#[tokio::test]
async fn add_venue_missing_name_errors() {
  let s = store().await;
  let err = s.add_venue(new_venue("", "SF", "CA")).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::MissingField { entity: "venue", field: "name" })
  ));
}

#[tokio::test]
async fn add_venue_bad_state_code_errors() {
  let s = store().await;
  let err = s
    .add_venue(new_venue("The Fillmore", "San Francisco", "California"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::InvalidField { .. })));
}

#[tokio::test]
async fn add_venue_empty_genres_errors() {
  let s = store().await;
  let mut input = new_venue("The Fillmore", "San Francisco", "CA");
  input.genres = vec![];
  let err = s.add_venue(input).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::MissingField { field: "genres", .. })
  ));
}

#[tokio::test]
async fn update_venue_rewrites_editable_fields() {
  let s = store().await;
  let venue = s
    .add_venue(new_venue("Old Name", "SF", "CA"))
    .await
    .unwrap();

  let updated = s
    .update_venue(venue.venue_id, VenueEdit {
      name:          "New Name".into(),
      city:          "Oakland".into(),
      state:         "CA".into(),
      address:       "2 Side St".into(),
      phone:         Some("555-0100".into()),
      genres:        vec!["Soul".into()],
      facebook_link: None,
    })
    .await
    .unwrap();

  assert_eq!(updated.venue_id, venue.venue_id);
  assert_eq!(updated.name, "New Name");
  assert_eq!(updated.city, "Oakland");
  assert_eq!(updated.genres, vec!["Soul"]);

  let fetched = s.get_venue(venue.venue_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "New Name");
  assert_eq!(fetched.phone.as_deref(), Some("555-0100"));
}

#[tokio::test]
async fn update_missing_venue_errors() {
  let s = store().await;
  let id = Uuid::new_v4();
  let err = s
    .update_venue(id, VenueEdit {
      name:          "X".into(),
      city:          "SF".into(),
      state:         "CA".into(),
      address:       "1 Main St".into(),
      phone:         None,
      genres:        vec!["Jazz".into()],
      facebook_link: None,
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::VenueNotFound(v)) if v == id));
}

#[tokio::test]
async fn delete_missing_venue_errors() {
  let s = store().await;
  let err = s.delete_venue(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::VenueNotFound(_))));
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_venues_is_case_insensitive_substring() {
  let s = store().await;
  s.add_venue(new_venue("Blue Note", "NYC", "NY")).await.unwrap();
  s.add_venue(new_venue("Bluebird", "SF", "CA")).await.unwrap();
  s.add_venue(new_venue("Red Room", "SF", "CA")).await.unwrap();

  let results = s.search_venues("blue").await.unwrap();
  let mut names: Vec<_> = results.iter().map(|v| v.name.as_str()).collect();
  names.sort();
  assert_eq!(results.len(), 2);
  assert_eq!(names, vec!["Blue Note", "Bluebird"]);

  // Query casing is irrelevant too.
  assert_eq!(s.search_venues("BLUE").await.unwrap().len(), 2);
  assert_eq!(s.search_venues("bIrD").await.unwrap().len(), 1);
}

#[tokio::test]
async fn search_artists_matches_inner_substring() {
  let s = store().await;
  s.add_artist(new_artist("Guns N Petals", "SF", "CA")).await.unwrap();
  s.add_artist(new_artist("The Wild Sax Band", "SF", "CA")).await.unwrap();

  let results = s.search_artists("sax").await.unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].name, "The Wild Sax Band");

  assert!(s.search_artists("polka").await.unwrap().is_empty());
}

// ─── Artists ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn edit_artist_changes_only_the_edited_fields() {
  let s = store().await;
  let mut input = new_artist("Guns N Petals", "San Francisco", "CA");
  input.phone = Some("326-123-5000".into());
  let artist = s.add_artist(input).await.unwrap();

  s.update_artist(artist.artist_id, ArtistEdit {
    name:          "Guns N Roses".into(),
    city:          "Los Angeles".into(),
    state:         artist.state.clone(),
    phone:         artist.phone.clone(),
    genres:        artist.genres.clone(),
    facebook_link: artist.facebook_link.clone(),
  })
  .await
  .unwrap();

  let fetched = s.get_artist(artist.artist_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "Guns N Roses");
  assert_eq!(fetched.city, "Los Angeles");
  // Everything else is untouched.
  assert_eq!(fetched.state, artist.state);
  assert_eq!(fetched.phone, artist.phone);
  assert_eq!(fetched.genres, artist.genres);
  assert_eq!(fetched.image_link, artist.image_link);
}

// ─── Shows ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_show_and_filter_by_foreign_key() {
  let s = store().await;
  let venue = s.add_venue(new_venue("V", "SF", "CA")).await.unwrap();
  let a1 = s.add_artist(new_artist("A1", "SF", "CA")).await.unwrap();
  let a2 = s.add_artist(new_artist("A2", "SF", "CA")).await.unwrap();

  let show = s
    .add_show(NewShow {
      artist_id:  a1.artist_id,
      venue_id:   venue.venue_id,
      start_time: "2024-06-03 20:00:00".into(),
    })
    .await
    .unwrap();
  s.add_show(NewShow {
    artist_id:  a2.artist_id,
    venue_id:   venue.venue_id,
    start_time: "2024-07-04 21:00:00".into(),
  })
  .await
  .unwrap();

  let fetched = s.get_show(show.show_id).await.unwrap().unwrap();
  assert_eq!(fetched.start_time, "2024-06-03 20:00:00");

  assert_eq!(s.list_shows().await.unwrap().len(), 2);
  assert_eq!(s.shows_for_venue(venue.venue_id).await.unwrap().len(), 2);

  let by_a1 = s.shows_for_artist(a1.artist_id).await.unwrap();
  assert_eq!(by_a1.len(), 1);
  assert_eq!(by_a1[0].show_id, show.show_id);
}

#[tokio::test]
async fn add_show_unknown_artist_errors() {
  let s = store().await;
  let venue = s.add_venue(new_venue("V", "SF", "CA")).await.unwrap();
  let ghost = Uuid::new_v4();

  let err = s
    .add_show(NewShow {
      artist_id:  ghost,
      venue_id:   venue.venue_id,
      start_time: "2024-06-03 20:00:00".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::ArtistNotFound(a)) if a == ghost));

  // Nothing was inserted.
  assert!(s.list_shows().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_show_unknown_venue_errors() {
  let s = store().await;
  let artist = s.add_artist(new_artist("A", "SF", "CA")).await.unwrap();
  let ghost = Uuid::new_v4();

  let err = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   ghost,
      start_time: "2024-06-03 20:00:00".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::VenueNotFound(v)) if v == ghost));
}

#[tokio::test]
async fn add_show_unparsable_start_time_errors() {
  let s = store().await;
  let venue = s.add_venue(new_venue("V", "SF", "CA")).await.unwrap();
  let artist = s.add_artist(new_artist("A", "SF", "CA")).await.unwrap();

  let err = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   venue.venue_id,
      start_time: "whenever".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Core(CoreError::DateParse(_))));
}

// ─── Cascade deletes ─────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_venue_cascades_to_its_shows() {
  let s = store().await;
  let venue = s.add_venue(new_venue("V", "SF", "CA")).await.unwrap();
  let other = s.add_venue(new_venue("W", "LA", "CA")).await.unwrap();
  let artist = s.add_artist(new_artist("A", "SF", "CA")).await.unwrap();

  let s1 = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   venue.venue_id,
      start_time: "2024-06-03 20:00:00".into(),
    })
    .await
    .unwrap();
  let s2 = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   venue.venue_id,
      start_time: "2024-06-04 20:00:00".into(),
    })
    .await
    .unwrap();
  let elsewhere = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   other.venue_id,
      start_time: "2024-06-05 20:00:00".into(),
    })
    .await
    .unwrap();

  s.delete_venue(venue.venue_id).await.unwrap();

  assert!(s.get_venue(venue.venue_id).await.unwrap().is_none());
  assert!(s.get_show(s1.show_id).await.unwrap().is_none());
  assert!(s.get_show(s2.show_id).await.unwrap().is_none());
  // Shows at other venues survive.
  assert!(s.get_show(elsewhere.show_id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_artist_cascades_to_its_shows() {
  let s = store().await;
  let venue = s.add_venue(new_venue("V", "SF", "CA")).await.unwrap();
  let artist = s.add_artist(new_artist("A", "SF", "CA")).await.unwrap();
  let other = s.add_artist(new_artist("B", "SF", "CA")).await.unwrap();

  let gone = s
    .add_show(NewShow {
      artist_id:  artist.artist_id,
      venue_id:   venue.venue_id,
      start_time: "2024-06-03 20:00:00".into(),
    })
    .await
    .unwrap();
  let kept = s
    .add_show(NewShow {
      artist_id:  other.artist_id,
      venue_id:   venue.venue_id,
      start_time: "2024-06-04 20:00:00".into(),
    })
    .await
    .unwrap();

  s.delete_artist(artist.artist_id).await.unwrap();

  assert!(s.get_artist(artist.artist_id).await.unwrap().is_none());
  assert!(s.get_show(gone.show_id).await.unwrap().is_none());
  assert!(s.get_show(kept.show_id).await.unwrap().is_some());
}
