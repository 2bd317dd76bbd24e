//! Change detection and delta arithmetic.

use runehelp_server::stats::diff::{build_report, cached_report, has_changed};
use runehelp_server::stats::types::{BossValue, MetricSet, SkillValue};

fn set_with_skill(name: &str, level: i32, xp: i64) -> MetricSet {
    let mut set = MetricSet::zeroed();
    set.skills.insert(name.into(), SkillValue { level, xp });
    set
}

#[test]
fn identical_sets_are_unchanged() {
    let m = set_with_skill("Attack", 60, 273_742);
    assert!(!has_changed(&m, &m.clone()));
}

#[test]
fn empty_previous_set_is_always_a_change() {
    let m = set_with_skill("Attack", 60, 273_742);
    assert!(has_changed(&m, &MetricSet::default()));
    // even an all-zero first fetch persists
    assert!(has_changed(&MetricSet::zeroed(), &MetricSet::default()));
}

#[test]
fn xp_movement_is_a_change() {
    let prev = set_with_skill("Fishing", 70, 737_627);
    let cur = set_with_skill("Fishing", 70, 741_000);
    assert!(has_changed(&cur, &prev));
}

#[test]
fn newly_appeared_nonzero_metric_is_a_change() {
    // previous snapshot predates the Hespori board
    let mut prev = MetricSet::zeroed();
    prev.bosses.remove("Hespori");

    let mut cur = MetricSet::zeroed();
    cur.bosses
        .insert("Hespori".into(), BossValue { kills: 3, rank: 90_000 });

    assert!(has_changed(&cur, &prev));
}

#[test]
fn boss_rank_drift_alone_is_not_a_change() {
    let mut prev = MetricSet::zeroed();
    prev.bosses
        .insert("Zulrah".into(), BossValue { kills: 120, rank: 50_000 });

    let mut cur = prev.clone();
    cur.bosses
        .insert("Zulrah".into(), BossValue { kills: 120, rank: 51_344 });

    assert!(!has_changed(&cur, &prev));
}

#[test]
fn deltas_are_current_minus_previous() {
    let prev = set_with_skill("Overall", 3, 100);
    let cur = set_with_skill("Overall", 4, 150);

    let report = build_report("Zezima", &cur, &prev, true, false);
    let overall = &report.skills["Overall"];
    assert_eq!(overall.level_diff, 1);
    assert_eq!(overall.xp_diff, 50);
    assert!(report.has_previous_snapshot);
    assert!(!report.cached);
}

#[test]
fn self_comparison_yields_zero_deltas() {
    let m = set_with_skill("Herblore", 50, 101_333);
    let report = build_report("Zezima", &m, &m.clone(), true, false);
    let herblore = &report.skills["Herblore"];
    assert_eq!((herblore.level_diff, herblore.xp_diff), (0, 0));
    assert_eq!((herblore.level, herblore.xp), (50, 101_333));
}

#[test]
fn first_snapshot_reports_zero_deltas() {
    let cur = set_with_skill("Slayer", 85, 3_377_000);
    let report = build_report("Zezima", &cur, &MetricSet::default(), false, false);
    let slayer = &report.skills["Slayer"];
    assert_eq!((slayer.level_diff, slayer.xp_diff), (0, 0));
    assert!(!report.has_previous_snapshot);
}

#[test]
fn cached_report_is_flagged_and_flat() {
    let mut latest = MetricSet::zeroed();
    latest
        .skills
        .insert("Magic".into(), SkillValue { level: 94, xp: 8_771_558 });
    latest
        .bosses
        .insert("Kraken".into(), BossValue { kills: 512, rank: 30_001 });

    let report = cached_report("Zezima", &latest);
    assert!(report.cached);
    assert!(report.has_previous_snapshot);
    assert!(report
        .skills
        .values()
        .all(|s| s.level_diff == 0 && s.xp_diff == 0));
    assert!(report.bosses.values().all(|b| b.kills_diff == 0));
    assert_eq!(report.skills["Magic"].xp, 8_771_558);
    assert_eq!(report.bosses["Kraken"].kills, 512);
}
