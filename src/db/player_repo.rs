use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::Player;

/// Fetch-or-create a player by username. The username is the durable
/// identity; re-upserting an existing name returns the same row.
pub async fn upsert(db: &PgPool, username: &str) -> Result<Player> {
    sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (username)
        VALUES ($1)
        ON CONFLICT (username) DO UPDATE SET username = EXCLUDED.username
        RETURNING id, username, created_at
        "#,
    )
    .bind(username)
    .fetch_one(db)
    .await
    .context("upserting player")
}
