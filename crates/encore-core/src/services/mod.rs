pub mod tracker_service;

pub use tracker_service::{TrackerOptions, TrackerService};
