pub mod filter;
pub mod search;

pub use filter::filter_snapshot;
pub use search::{Category, SearchHit, search_snapshot};
