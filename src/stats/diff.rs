//! Change detection and delta computation between metric snapshots.

use std::collections::BTreeMap;

use crate::stats::types::{BossEntry, MetricSet, PlayerReport, SkillEntry};

/// Returns true when `current` differs meaningfully from `previous`.
///
/// A skill counts as changed when its level or xp moved; a boss when its
/// kill count moved (rank drifts on its own as other players climb, so
/// rank alone never triggers a persist). A key missing from `previous`
/// compares against zero values, so a newly appeared non-zero metric is
/// a change. An entirely empty previous set is always a change.
pub fn has_changed(current: &MetricSet, previous: &MetricSet) -> bool {
    if previous.is_empty() {
        return true;
    }

    let skills_moved = current.skills.iter().any(|(name, cur)| {
        let prev = previous.skill(name);
        cur.level != prev.level || cur.xp != prev.xp
    });
    if skills_moved {
        return true;
    }

    current
        .bosses
        .iter()
        .any(|(name, cur)| cur.kills != previous.boss(name).kills)
}

/// Shapes the response payload: every metric in `current` paired with its
/// signed difference from `previous`. A key with no prior value reports a
/// zero delta (first snapshot included).
pub fn build_report(
    username: &str,
    current: &MetricSet,
    previous: &MetricSet,
    has_previous_snapshot: bool,
    cached: bool,
) -> PlayerReport {
    let skills: BTreeMap<String, SkillEntry> = current
        .skills
        .iter()
        .map(|(name, cur)| {
            let (level_diff, xp_diff) = match previous.skills.get(name) {
                Some(prev) => (cur.level - prev.level, cur.xp - prev.xp),
                None => (0, 0),
            };
            (
                name.clone(),
                SkillEntry {
                    level: cur.level,
                    xp: cur.xp,
                    level_diff,
                    xp_diff,
                },
            )
        })
        .collect();

    let bosses: BTreeMap<String, BossEntry> = current
        .bosses
        .iter()
        .map(|(name, cur)| {
            let kills_diff = match previous.bosses.get(name) {
                Some(prev) => cur.kills - prev.kills,
                None => 0,
            };
            (
                name.clone(),
                BossEntry {
                    kills: cur.kills,
                    rank: cur.rank,
                    kills_diff,
                },
            )
        })
        .collect();

    PlayerReport {
        username: username.to_string(),
        skills,
        bosses,
        has_previous_snapshot,
        cached,
    }
}

/// Report for the cached path: the latest snapshot served against itself,
/// so every delta is zero.
pub fn cached_report(username: &str, latest: &MetricSet) -> PlayerReport {
    build_report(username, latest, latest, true, true)
}
