use serde::Serialize;

use crate::cache::snapshot::Snapshot;

/// Category tag attached to every suggestion, in the upstream API's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
  #[serde(rename = "artist/band")]
  ArtistBand,
  #[serde(rename = "member")]
  Member,
  #[serde(rename = "location")]
  Location,
  #[serde(rename = "first album date")]
  FirstAlbumDate,
  #[serde(rename = "creation date")]
  CreationDate,
}

/// One matching field occurrence. `name` is the literal matched value as it
/// appears in the snapshot, not the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
  pub name: String,
  pub category: Category,
}

/// Case-folded substring scan over every searchable field of the snapshot.
///
/// One record contributes one hit per matching field occurrence, so a band
/// whose name and two members match yields three hits. Hits come out in
/// record-then-field scan order: name, members, locations, first album,
/// creation year.
///
/// Callers must validate the query first: every string contains the empty
/// substring, so an empty `query` yields one hit per field of the whole
/// snapshot. `TrackerService` rejects it as `InvalidQuery` before getting
/// here; embedders calling this directly have to do the same.
pub fn search_snapshot(snapshot: &Snapshot, query: &str) -> Vec<SearchHit> {
  let needle = query.to_lowercase();
  let mut hits = Vec::new();

  for cached in &snapshot.artists {
    let artist = &cached.artist;

    if artist.name.to_lowercase().contains(&needle) {
      hits.push(SearchHit { name: artist.name.clone(), category: Category::ArtistBand });
    }

    for member in &artist.members {
      if member.to_lowercase().contains(&needle) {
        hits.push(SearchHit { name: member.clone(), category: Category::Member });
      }
    }

    for location in &cached.locations {
      if location.to_lowercase().contains(&needle) {
        hits.push(SearchHit { name: location.clone(), category: Category::Location });
      }
    }

    if artist.first_album.to_lowercase().contains(&needle) {
      hits.push(SearchHit { name: artist.first_album.clone(), category: Category::FirstAlbumDate });
    }

    // The creation year is matched against its decimal rendering.
    let creation = artist.creation_date.to_string();
    if creation.contains(&needle) {
      hits.push(SearchHit { name: creation, category: Category::CreationDate });
    }
  }

  hits
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::snapshot::CachedArtist;
  use crate::domain::Artist;
  use std::time::Instant;

  fn band(id: u64, name: &str, members: &[&str], creation: i32, first_album: &str, locations: &[&str]) -> CachedArtist {
    CachedArtist {
      artist: Artist {
        id,
        image: String::new(),
        name: name.into(),
        creation_date: creation,
        first_album: first_album.into(),
        members: members.iter().map(|m| m.to_string()).collect(),
        locations: format!("https://example.com/api/locations/{id}"),
        concert_dates: String::new(),
        relations: String::new(),
      },
      locations: locations.iter().map(|l| l.to_string()).collect(),
    }
  }

  fn snapshot(artists: Vec<CachedArtist>) -> Snapshot {
    Snapshot::new(artists, Instant::now())
  }

  #[test]
  fn matches_are_case_insensitive() {
    let snap = snapshot(vec![band(1, "The Test Band", &[], 1990, "1995-06-15", &[])]);

    let hits = search_snapshot(&snap, "tEsT bAnD");
    assert_eq!(hits, vec![SearchHit { name: "The Test Band".into(), category: Category::ArtistBand }]);
  }

  #[test]
  fn one_record_can_contribute_hits_across_categories() {
    let snap = snapshot(vec![band(1, "Queens", &["Queenie", "Bob"], 1998, "1998-09-22", &["queenstown-new_zealand"])]);

    let hits = search_snapshot(&snap, "queen");
    let categories: Vec<Category> = hits.iter().map(|h| h.category).collect();
    assert_eq!(categories, vec![Category::ArtistBand, Category::Member, Category::Location]);
  }

  #[test]
  fn hits_follow_record_then_field_order() {
    let snap = snapshot(vec![
      band(1, "Alpha", &["Bo"], 1990, "1991-01-01", &[]),
      band(2, "Bravo", &[], 1992, "1993-01-01", &["bogota-colombia"]),
    ]);

    let hits = search_snapshot(&snap, "bo");
    let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "bogota-colombia"]);
  }

  #[test]
  fn creation_year_matches_decimal_rendering() {
    let snap = snapshot(vec![band(1, "The Test Band", &["Alice", "Bob"], 1990, "1995-06-15", &["New York"])]);

    let hits = search_snapshot(&snap, "1990");
    assert_eq!(hits, vec![SearchHit { name: "1990".into(), category: Category::CreationDate }]);
  }

  #[test]
  fn no_match_yields_empty_result() {
    let snap = snapshot(vec![band(1, "The Test Band", &[], 1990, "1995-06-15", &["New York"])]);
    assert!(search_snapshot(&snap, "houston").is_empty());
  }

  #[test]
  fn every_hit_value_appears_verbatim_in_the_snapshot() {
    let snap = snapshot(vec![
      band(1, "The Test Band", &["Alice", "Bob"], 1990, "1995-06-15", &["New York", "Los Angeles"]),
      band(2, "Testify", &["Bobby"], 1995, "1996-03-03", &[]),
    ]);

    for hit in search_snapshot(&snap, "b") {
      let found = snap.artists.iter().any(|c| {
        c.artist.name == hit.name
          || c.artist.members.contains(&hit.name)
          || c.locations.contains(&hit.name)
          || c.artist.first_album == hit.name
          || c.artist.creation_date.to_string() == hit.name
      });
      assert!(found, "hit {:?} not present in snapshot", hit);
    }
  }

  #[test]
  fn empty_query_matches_every_field_so_callers_must_validate() {
    let snap = snapshot(vec![band(1, "The Test Band", &["Alice"], 1990, "1995-06-15", &["New York"])]);

    // name + one member + one location + first album + creation year
    assert_eq!(search_snapshot(&snap, "").len(), 5);
  }

  #[test]
  fn category_tags_serialize_with_api_wording() {
    let hit = SearchHit { name: "1990".into(), category: Category::CreationDate };
    let json = serde_json::to_value(&hit).unwrap();
    assert_eq!(json["category"], "creation date");

    assert_eq!(serde_json::to_value(Category::ArtistBand).unwrap(), "artist/band");
    assert_eq!(serde_json::to_value(Category::FirstAlbumDate).unwrap(), "first album date");
  }
}
