use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// One recorded observation of a player. Rows are append-only; "latest"
/// means greatest `created_at` for the player.
#[derive(Debug, FromRow)]
pub struct Snapshot {
    pub id: Uuid,
    pub player_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct SkillRecord {
    pub snapshot_id: Uuid,
    pub name: String,
    pub level: i32,
    pub xp: i64,
}

#[derive(Debug, FromRow)]
pub struct BossRecord {
    pub snapshot_id: Uuid,
    pub name: String,
    pub kills: i32,
    pub rank: i32,
}
