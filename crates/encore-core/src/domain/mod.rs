pub mod artist;

pub use artist::{Artist, ArtistId};
