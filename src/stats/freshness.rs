//! Decides whether a player's latest snapshot is stale enough to re-poll
//! the hiscores.

use chrono::{DateTime, Utc};

/// How long a snapshot is served as-is before the hiscores are polled
/// again. Bounds upstream call volume; the hiscores rate-limit bans
/// aggressive pollers.
pub const FRESHNESS_WINDOW_SECS: i64 = 300;

/// Returns true when a fresh upstream fetch is warranted.
///
/// No prior snapshot always warrants a fetch; otherwise the window is
/// inclusive at exactly [`FRESHNESS_WINDOW_SECS`] elapsed.
pub fn should_refetch(latest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match latest {
        None => true,
        Some(taken_at) => (now - taken_at).num_seconds() >= FRESHNESS_WINDOW_SECS,
    }
}
