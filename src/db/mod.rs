pub mod models;
pub mod player_repo;
pub mod snapshot_repo;
