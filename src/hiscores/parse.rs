//! Normalizes both hiscores payload shapes into one [`MetricSet`].
//!
//! The service answers either with structured JSON
//! (`{skills: [...], bosses: [...]}`) or with the legacy flat format:
//! one CSV line per metric, skills first in enumeration order
//! (`rank,unused,level,xp`), then bosses (`rank,kills`). Both shapes
//! land in the same internal representation before any delta logic
//! runs.

use serde::Deserialize;

use crate::hiscores::HiscoresError;
use crate::stats::types::{BossValue, MetricSet, SkillValue, BOSS_NAMES, SKILL_NAMES, UNRANKED};

#[derive(Debug, Deserialize)]
struct JsonPayload {
    #[serde(default)]
    skills: Vec<JsonSkill>,
    #[serde(default)]
    bosses: Vec<JsonBoss>,
}

#[derive(Debug, Deserialize)]
struct JsonSkill {
    name: String,
    #[serde(default)]
    level: i32,
    #[serde(default)]
    xp: i64,
}

#[derive(Debug, Deserialize)]
struct JsonBoss {
    name: String,
    #[serde(default)]
    score: i32,
    #[serde(default = "unranked")]
    rank: i32,
}

fn unranked() -> i32 {
    UNRANKED
}

/// Fields of one legacy skill line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLine {
    pub rank: i32,
    pub level: i32,
    pub xp: i64,
}

/// Fields of one legacy boss line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossLine {
    pub rank: i32,
    pub kills: i32,
}

/// Parse either payload shape into a `MetricSet` covering every tracked
/// skill and boss; entries the payload lacks stay at their defaults.
pub fn parse_hiscores(body: &str) -> Result<MetricSet, HiscoresError> {
    if body.trim_start().starts_with('{') {
        parse_json(body)
    } else {
        parse_flat(body)
    }
}

fn parse_json(body: &str) -> Result<MetricSet, HiscoresError> {
    let payload: JsonPayload =
        serde_json::from_str(body).map_err(|e| HiscoresError::Malformed(e.to_string()))?;

    let mut set = MetricSet::zeroed();
    for s in payload.skills {
        // Names outside the tracked set are ignored; the hiscores grow
        // new boards faster than we adopt them.
        if let Some(slot) = set.skills.get_mut(&s.name) {
            *slot = SkillValue {
                level: s.level.max(0),
                xp: s.xp.max(0),
            };
        }
    }
    for b in payload.bosses {
        if let Some(slot) = set.bosses.get_mut(&b.name) {
            *slot = BossValue {
                kills: b.score.max(0),
                rank: b.rank,
            };
        }
    }
    Ok(set)
}

fn parse_flat(body: &str) -> Result<MetricSet, HiscoresError> {
    // A flat payload always leads with the Overall line; a body with no
    // numeric field up front is an error page, not hiscores data.
    let first = body.lines().next().unwrap_or("");
    if !first.split(',').any(|f| f.trim().parse::<i64>().is_ok()) {
        return Err(HiscoresError::Malformed(
            "expected csv hiscore lines".into(),
        ));
    }

    let mut set = MetricSet::zeroed();
    let mut lines = body.lines();
    for name in SKILL_NAMES {
        let Some(line) = lines.next() else { break };
        let parsed = parse_skill_line(line);
        set.skills.insert(
            name.to_string(),
            SkillValue {
                level: parsed.level,
                xp: parsed.xp,
            },
        );
    }
    for name in BOSS_NAMES {
        let Some(line) = lines.next() else { break };
        let parsed = parse_boss_line(line);
        set.bosses.insert(
            name.to_string(),
            BossValue {
                kills: parsed.kills,
                rank: parsed.rank,
            },
        );
    }
    Ok(set)
}

/// Decode a legacy skill line (`rank,unused,level,xp`). Missing fields
/// read as zero; the hiscores report unranked entries as -1, which
/// clamps to zero for level and xp.
pub fn parse_skill_line(line: &str) -> SkillLine {
    let parts: Vec<&str> = line.split(',').collect();
    SkillLine {
        rank: field(&parts, 0) as i32,
        level: field(&parts, 2).max(0) as i32,
        xp: field(&parts, 3).max(0),
    }
}

/// Decode a legacy boss line (`rank,kills`).
pub fn parse_boss_line(line: &str) -> BossLine {
    let parts: Vec<&str> = line.split(',').collect();
    BossLine {
        rank: field(&parts, 0) as i32,
        kills: field(&parts, 1).max(0) as i32,
    }
}

fn field(parts: &[&str], idx: usize) -> i64 {
    parts
        .get(idx)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
