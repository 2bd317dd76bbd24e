//! Both hiscores payload shapes must normalize to the same metric set.

use runehelp_server::hiscores::parse::{parse_boss_line, parse_hiscores, parse_skill_line};
use runehelp_server::stats::types::{BOSS_NAMES, SKILL_NAMES, UNRANKED};

#[test]
fn skill_line_decodes_positionally() {
    let line = parse_skill_line("1,0,99,13034431");
    assert_eq!(line.rank, 1);
    assert_eq!(line.level, 99);
    assert_eq!(line.xp, 13_034_431);
}

#[test]
fn unranked_skill_line_clamps_to_zero() {
    let line = parse_skill_line("-1,-1,-1,-1");
    assert_eq!(line.level, 0);
    assert_eq!(line.xp, 0);
}

#[test]
fn boss_line_decodes_rank_and_kills() {
    let line = parse_boss_line("23456,150");
    assert_eq!(line.rank, 23_456);
    assert_eq!(line.kills, 150);
}

#[test]
fn flat_payload_covers_every_tracked_metric() {
    // Overall line plus Attack, everything else missing.
    let body = "1,0,99,13034431\n500,0,99,13034431\n";
    let set = parse_hiscores(body).unwrap();

    assert_eq!(set.skills.len(), SKILL_NAMES.len());
    assert_eq!(set.bosses.len(), BOSS_NAMES.len());

    assert_eq!(set.skill("Overall").xp, 13_034_431);
    assert_eq!(set.skill("Attack").level, 99);
    // missing lines default to zero values
    assert_eq!(set.skill("Construction").level, 0);
    assert_eq!(set.boss("Zulrah").kills, 0);
    assert_eq!(set.boss("Zulrah").rank, UNRANKED);
}

#[test]
fn json_payload_normalizes_to_the_same_shape() {
    let body = r#"{
        "skills": [
            {"name": "Overall", "level": 2277, "xp": 4600000000},
            {"name": "Attack", "level": 99, "xp": 13034431}
        ],
        "bosses": [
            {"name": "Zulrah", "score": 1500, "rank": 2000}
        ]
    }"#;
    let set = parse_hiscores(body).unwrap();

    assert_eq!(set.skills.len(), SKILL_NAMES.len());
    assert_eq!(set.bosses.len(), BOSS_NAMES.len());
    assert_eq!(set.skill("Overall").level, 2277);
    assert_eq!(set.skill("Attack").xp, 13_034_431);
    assert_eq!(set.boss("Zulrah").kills, 1500);
    assert_eq!(set.boss("Zulrah").rank, 2000);
    assert_eq!(set.boss("Vorkath").rank, UNRANKED);
}

#[test]
fn unknown_json_names_are_ignored() {
    let body = r#"{"skills": [{"name": "Sailing", "level": 1, "xp": 0}], "bosses": []}"#;
    let set = parse_hiscores(body).unwrap();
    assert!(!set.skills.contains_key("Sailing"));
    assert_eq!(set.skills.len(), SKILL_NAMES.len());
}

#[test]
fn html_error_page_is_malformed() {
    let body = "<html><body>Service unavailable</body></html>";
    assert!(parse_hiscores(body).is_err());
}

#[test]
fn truncated_json_is_malformed() {
    assert!(parse_hiscores(r#"{"skills": ["#).is_err());
}
