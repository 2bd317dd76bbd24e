use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Rank reported by the hiscores when a player is not on a board.
pub const UNRANKED: i32 = -1;

/// The 24 tracked skills, in hiscores order.
pub const SKILL_NAMES: [&str; 24] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecrafting",
    "Hunter",
    "Construction",
];

/// The 44 tracked bosses, in hiscores order.
pub const BOSS_NAMES: [&str; 44] = [
    "Abyssal Sire",
    "Alchemical Hydra",
    "Barrows Chests",
    "Bryophyta",
    "Callisto",
    "Cerberus",
    "Chambers of Xeric",
    "Chambers of Xeric: Challenge Mode",
    "Chaos Elemental",
    "Chaos Fanatic",
    "Commander Zilyana",
    "Corporeal Beast",
    "Crazy Archaeologist",
    "Dagannoth Prime",
    "Dagannoth Rex",
    "Dagannoth Supreme",
    "Deranged Archaeologist",
    "General Graardor",
    "Giant Mole",
    "Grotesque Guardians",
    "Hespori",
    "Kalphite Queen",
    "King Black Dragon",
    "Kraken",
    "Kree'Arra",
    "K'ril Tsutsaroth",
    "Mimic",
    "Nightmare",
    "Obor",
    "Sarachnis",
    "Scorpia",
    "Skotizo",
    "The Gauntlet",
    "The Corrupted Gauntlet",
    "Theatre of Blood",
    "Thermonuclear Smoke Devil",
    "TzKal-Zuk",
    "TzTok-Jad",
    "Venenatis",
    "Vet'ion",
    "Vorkath",
    "Wintertodt",
    "Zalcano",
    "Zulrah",
];

/// Current level + experience for one skill.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillValue {
    pub level: i32,
    pub xp: i64,
}

/// Kill count + hiscores rank for one boss.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BossValue {
    pub kills: i32,
    pub rank: i32,
}

impl Default for BossValue {
    fn default() -> Self {
        BossValue {
            kills: 0,
            rank: UNRANKED,
        }
    }
}

/// One full observation of a player's metrics, keyed by skill / boss name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSet {
    pub skills: HashMap<String, SkillValue>,
    pub bosses: HashMap<String, BossValue>,
}

impl MetricSet {
    /// Every tracked skill and boss at its default value.
    pub fn zeroed() -> Self {
        MetricSet {
            skills: SKILL_NAMES
                .iter()
                .map(|n| (n.to_string(), SkillValue::default()))
                .collect(),
            bosses: BOSS_NAMES
                .iter()
                .map(|n| (n.to_string(), BossValue::default()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.bosses.is_empty()
    }

    pub fn skill(&self, name: &str) -> SkillValue {
        self.skills.get(name).copied().unwrap_or_default()
    }

    pub fn boss(&self, name: &str) -> BossValue {
        self.bosses.get(name).copied().unwrap_or_default()
    }
}

/// One skill in a [`PlayerReport`]: current value + delta vs the previous
/// snapshot.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub level: i32,
    pub xp: i64,
    pub level_diff: i32,
    pub xp_diff: i64,
}

/// One boss in a [`PlayerReport`].
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BossEntry {
    pub kills: i32,
    pub rank: i32,
    pub kills_diff: i32,
}

/// Response body for `GET /api/player/{username}`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub username: String,
    pub skills: BTreeMap<String, SkillEntry>,
    pub bosses: BTreeMap<String, BossEntry>,
    pub has_previous_snapshot: bool,
    pub cached: bool,
}
