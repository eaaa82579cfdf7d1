pub mod cache;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod query;
pub mod services;

pub use errors::CoreError;
