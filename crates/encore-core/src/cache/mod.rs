pub mod snapshot;
pub mod store;

pub use snapshot::{CachedArtist, Snapshot};
pub use store::SnapshotStore;
