//! The snapshot/delta pipeline behind `GET /api/player/{username}`.

use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;

use crate::db::{player_repo, snapshot_repo};
use crate::hiscores::{HiscoresClient, HiscoresError};
use crate::stats::types::{MetricSet, PlayerReport};
use crate::stats::{diff, freshness};

/// Everything that can go wrong while producing a report. The HTTP layer
/// maps these onto the wire payloads; nothing else leaks out.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("username must not be blank")]
    InvalidUsername,
    #[error("player not known to the hiscores")]
    NotFound,
    #[error("hiscores unavailable")]
    Upstream(#[source] HiscoresError),
    #[error("snapshot store failure")]
    Persistence(#[source] anyhow::Error),
}

/// Produce the player's current metrics plus deltas against the previous
/// snapshot, persisting a new snapshot only when the hiscores show real
/// change.
pub async fn get_player_report(
    db: &PgPool,
    hiscores: &HiscoresClient,
    username: &str,
) -> Result<PlayerReport, ReportError> {
    // 1) Normalize the lookup key. Blank names never reach the store.
    let username = username.trim();
    if username.is_empty() {
        return Err(ReportError::InvalidUsername);
    }

    // 2) Fetch-or-create the player, then its latest snapshot.
    let player = player_repo::upsert(db, username)
        .await
        .map_err(ReportError::Persistence)?;
    let latest = snapshot_repo::latest_for_player(db, player.id)
        .await
        .map_err(ReportError::Persistence)?;

    // 3) Freshness gate: a recent snapshot is served as-is, zero deltas.
    if let Some(snap) = &latest {
        if !freshness::should_refetch(Some(snap.created_at), Utc::now()) {
            let current = snapshot_repo::metric_set(db, snap.id)
                .await
                .map_err(ReportError::Persistence)?;
            return Ok(diff::cached_report(username, &current));
        }
    }

    // 4) Poll the hiscores.
    let fetched = match hiscores.fetch(username).await {
        Ok(set) => set,
        Err(HiscoresError::UnknownPlayer) => return Err(ReportError::NotFound),
        Err(err) => return Err(ReportError::Upstream(err)),
    };

    // 5) Previous metrics, empty when this is the first ever snapshot.
    let previous = match &latest {
        Some(snap) => snapshot_repo::metric_set(db, snap.id)
            .await
            .map_err(ReportError::Persistence)?,
        None => MetricSet::default(),
    };
    let has_previous = latest.is_some();

    // 6) Nothing moved: keep serving the existing snapshot instead of
    //    growing history with an identical row.
    if has_previous && !diff::has_changed(&fetched, &previous) {
        return Ok(diff::cached_report(username, &previous));
    }

    // 7) Real change (or first sighting): persist, then report deltas.
    snapshot_repo::record_snapshot(db, player.id, &fetched)
        .await
        .map_err(ReportError::Persistence)?;

    Ok(diff::build_report(
        username, &fetched, &previous, has_previous, false,
    ))
}
