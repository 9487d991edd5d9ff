//! Grouping of venues into (city, state) areas for the venues listing.

use std::collections::HashMap;

use serde::Serialize;

use crate::venue::Venue;

/// A bucket of venues sharing the same city and state.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
  pub city:   String,
  pub state:  String,
  pub venues: Vec<Venue>,
}

/// Group venues into one area per distinct (city, state) pair.
///
/// Areas appear in first-seen order and every venue lands in exactly one
/// area. The output `Vec` carries the insertion order; the map only holds
/// indices into it, keeping this a single pass.
pub fn group_by_area(venues: Vec<Venue>) -> Vec<Area> {
  let mut areas: Vec<Area> = Vec::new();
  let mut index: HashMap<(String, String), usize> = HashMap::new();

  for venue in venues {
    let key = (venue.city.clone(), venue.state.clone());
    match index.get(&key) {
      Some(&i) => areas[i].venues.push(venue),
      None => {
        index.insert(key, areas.len());
        areas.push(Area {
          city:   venue.city.clone(),
          state:  venue.state.clone(),
          venues: vec![venue],
        });
      }
    }
  }

  areas
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  fn venue(name: &str, city: &str, state: &str) -> Venue {
    Venue {
      venue_id:      Uuid::new_v4(),
      name:          name.into(),
      city:          city.into(),
      state:         state.into(),
      address:       "1 Main St".into(),
      phone:         None,
      genres:        vec!["Jazz".into()],
      image_link:    None,
      facebook_link: None,
    }
  }

  #[test]
  fn one_area_per_city_state_pair_in_first_seen_order() {
    let v1 = venue("The Fillmore", "San Francisco", "CA");
    let v2 = venue("The Troubadour", "Los Angeles", "CA");
    let v3 = venue("The Chapel", "San Francisco", "CA");
    let (id1, id2, id3) = (v1.venue_id, v2.venue_id, v3.venue_id);

    let areas = group_by_area(vec![v1, v2, v3]);

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].city, "San Francisco");
    assert_eq!(areas[0].state, "CA");
    assert_eq!(
      areas[0].venues.iter().map(|v| v.venue_id).collect::<Vec<_>>(),
      vec![id1, id3],
    );
    assert_eq!(areas[1].city, "Los Angeles");
    assert_eq!(
      areas[1].venues.iter().map(|v| v.venue_id).collect::<Vec<_>>(),
      vec![id2],
    );
  }

  #[test]
  fn same_city_name_in_different_states_is_two_areas() {
    let areas = group_by_area(vec![
      venue("A", "Springfield", "IL"),
      venue("B", "Springfield", "MA"),
    ]);
    assert_eq!(areas.len(), 2);
  }

  #[test]
  fn every_venue_appears_exactly_once() {
    let venues: Vec<_> = (0..10)
      .map(|i| venue(&format!("v{i}"), if i % 3 == 0 { "SF" } else { "LA" }, "CA"))
      .collect();
    let total: usize = group_by_area(venues).iter().map(|a| a.venues.len()).sum();
    assert_eq!(total, 10);
  }

  #[test]
  fn empty_input_yields_no_areas() {
    assert!(group_by_area(Vec::new()).is_empty());
  }
}
