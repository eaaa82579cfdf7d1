use encore_upstream::tracker_from_config;

/// Quick end-to-end check against the live API:
/// `cargo run --bin smoke_tracker -- "london"`
#[tokio::main]
async fn main() {
  tracing_subscriber::fmt::init();

  let query = std::env::args().nth(1).unwrap_or_else(|| "london".to_string());

  let tracker = tracker_from_config().expect("failed to wire tracker from config");

  // Warm synchronously here so the first query below hits a fresh snapshot.
  tracker.warm().await.expect("warm-up task panicked");

  let hits = tracker.search(&query).await.expect("search failed");
  println!("{} hit(s) for {query:?}", hits.len());
  for hit in &hits {
    println!("  {}", serde_json::to_string(hit).expect("hit is serializable"));
  }

  let records = tracker.filter(&query).await.expect("filter failed");
  println!("{} matching artist(s)", records.len());
  for record in &records {
    println!("  {} ({} location(s))", record.artist.name, record.locations.len());
  }
}
