use anyhow::{Context, Result};
use futures::try_join;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{BossRecord, SkillRecord, Snapshot};
use crate::stats::types::{BossValue, MetricSet, SkillValue};

/// Most recent snapshot for a player, if any.
pub async fn latest_for_player(db: &PgPool, player_id: Uuid) -> Result<Option<Snapshot>> {
    sqlx::query_as::<_, Snapshot>(
        r#"
        SELECT id, player_id, created_at
          FROM snapshots
         WHERE player_id = $1
         ORDER BY created_at DESC
         LIMIT 1
        "#,
    )
    .bind(player_id)
    .fetch_optional(db)
    .await
    .context("fetching latest snapshot")
}

/// Load a snapshot's records back into a [`MetricSet`].
pub async fn metric_set(db: &PgPool, snapshot_id: Uuid) -> Result<MetricSet> {
    let skills = sqlx::query_as::<_, SkillRecord>(
        "SELECT snapshot_id, name, level, xp FROM skill_records WHERE snapshot_id = $1",
    )
    .bind(snapshot_id)
    .fetch_all(db);

    let bosses = sqlx::query_as::<_, BossRecord>(
        "SELECT snapshot_id, name, kills, rank FROM boss_records WHERE snapshot_id = $1",
    )
    .bind(snapshot_id)
    .fetch_all(db);

    // Independent reads, one join point.
    let (skills, bosses) = try_join!(skills, bosses).context("fetching snapshot records")?;

    let mut set = MetricSet::default();
    for r in skills {
        set.skills.insert(
            r.name,
            SkillValue {
                level: r.level,
                xp: r.xp,
            },
        );
    }
    for r in bosses {
        set.bosses.insert(
            r.name,
            BossValue {
                kills: r.kills,
                rank: r.rank,
            },
        );
    }
    Ok(set)
}

/// Persist a new snapshot with every metric record in one transaction, so
/// a failed record insert cannot leave an orphaned snapshot behind.
pub async fn record_snapshot(db: &PgPool, player_id: Uuid, metrics: &MetricSet) -> Result<Snapshot> {
    let mut tx = db.begin().await.context("opening snapshot transaction")?;

    let snapshot = sqlx::query_as::<_, Snapshot>(
        r#"
        INSERT INTO snapshots (player_id)
        VALUES ($1)
        RETURNING id, player_id, created_at
        "#,
    )
    .bind(player_id)
    .fetch_one(&mut *tx)
    .await
    .context("inserting snapshot")?;

    for (name, value) in &metrics.skills {
        sqlx::query(
            "INSERT INTO skill_records (snapshot_id, name, level, xp) VALUES ($1, $2, $3, $4)",
        )
        .bind(snapshot.id)
        .bind(name)
        .bind(value.level)
        .bind(value.xp)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("inserting skill record {name}"))?;
    }

    for (name, value) in &metrics.bosses {
        sqlx::query(
            "INSERT INTO boss_records (snapshot_id, name, kills, rank) VALUES ($1, $2, $3, $4)",
        )
        .bind(snapshot.id)
        .bind(name)
        .bind(value.kills)
        .bind(value.rank)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("inserting boss record {name}"))?;
    }

    tx.commit().await.context("committing snapshot")?;
    Ok(snapshot)
}
