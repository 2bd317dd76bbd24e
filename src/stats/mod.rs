pub mod diff;
pub mod freshness;
pub mod tracker;
pub mod types;
