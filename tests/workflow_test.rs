//! End-to-end season workflows through the library API

use stratstats::{
    editor::{coerce_count, coerce_innings, save_batter, save_pitcher, UpsertOutcome},
    listing::{list_players, select_entry},
    report::TeamReport,
    storage::{BatterCounters, PitcherCounters, Quota, StatsDatabase},
    Role, StatsError,
};

fn counters(ab: &str, aba: &str, hits: &str, walks: &str) -> BatterCounters {
    BatterCounters {
        at_bats: coerce_count(ab),
        at_bats_available: coerce_count(aba),
        hits: coerce_count(hits),
        walks: coerce_count(walks),
        ..Default::default()
    }
}

#[test]
fn test_first_save_then_listing() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let team = db.create_team("Sluggers").unwrap();

    let outcome = save_batter(
        &mut db,
        team.id,
        "Hank",
        "Aaron",
        counters("400", "600", "110", "50"),
    )
    .unwrap();
    assert_eq!(outcome, UpsertOutcome::Inserted);

    let lines = list_players(&db, team.id, Role::Hitter).unwrap();
    assert_eq!(lines, vec!["Hank Aaron  ABR: 150  AVG: .275".to_string()]);
}

#[test]
fn test_weekly_update_cycle() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let team = db.create_team("Sluggers").unwrap();
    save_batter(&mut db, team.id, "Ann", "Able", counters("40", "120", "12", "4")).unwrap();

    // Re-entering the same sheet changes nothing
    assert_eq!(
        save_batter(&mut db, team.id, "Ann", "Able", counters("40", "120", "12", "4")).unwrap(),
        UpsertOutcome::Unchanged
    );

    // A blank walks field would wipe a stored value, so the whole update is refused
    assert_eq!(
        save_batter(&mut db, team.id, "Ann", "Able", counters("48", "120", "15", "")).unwrap(),
        UpsertOutcome::RejectedBlankField { field: "bb" }
    );

    assert_eq!(
        save_batter(&mut db, team.id, "Ann", "Able", counters("48", "120", "15", "5")).unwrap(),
        UpsertOutcome::Updated
    );
    let stored = db.get_batter(team.id, "Ann", "Able").unwrap().unwrap();
    assert_eq!(stored.counters.at_bats, 48);
    assert_eq!(stored.counters.at_bats_remaining(), 120 - 53);
}

#[test]
fn test_pick_from_listing_recovers_quota() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let team = db.create_team("Sluggers").unwrap();
    save_pitcher(
        &mut db,
        team.id,
        "Cy",
        "Young",
        PitcherCounters {
            innings_pitched: coerce_innings("100"),
            innings_available: coerce_innings("150.5"),
            earned_runs: coerce_count("30"),
            ..Default::default()
        },
    )
    .unwrap();

    let lines = list_players(&db, team.id, Role::Pitcher).unwrap();
    assert_eq!(lines, vec!["Cy Young  IPR: 50.5  ERA: 2.70".to_string()]);

    let selection = select_entry(&db, team.id, Role::Pitcher, &lines[0]).unwrap();
    assert_eq!(selection.first_name, "Cy");
    assert_eq!(selection.quota, Quota::Innings(150.5));
}

#[test]
fn test_teams_do_not_share_players() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let home = db.create_team("Home").unwrap();
    let away = db.create_team("Away").unwrap();
    save_batter(&mut db, home.id, "Ann", "Able", counters("10", "50", "3", "0")).unwrap();

    assert!(list_players(&db, away.id, Role::Hitter).unwrap().is_empty());
    assert!(matches!(
        select_entry(&db, away.id, Role::Hitter, "Ann Able  ABR: 40"),
        Err(StatsError::PlayerNotFound { .. })
    ));

    assert!(db.delete_team("Home").unwrap());
    assert!(db.get_batter(home.id, "Ann", "Able").unwrap().is_none());
    assert_eq!(db.list_teams().unwrap(), vec![away]);
}

#[test]
fn test_season_report() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let team = db.create_team("Sluggers").unwrap();
    save_batter(&mut db, team.id, "Ann", "Able", counters("10", "100", "3", "0")).unwrap();
    save_batter(&mut db, team.id, "Bob", "Baker", counters("20", "100", "5", "0")).unwrap();

    let report = TeamReport::load(&db, team).unwrap();
    let text = report.to_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Batters");
    assert!(lines[3].starts_with("A. Able"));
    assert!(lines[4].starts_with("B. Baker"));

    let totals: Vec<&str> = lines[6].split_whitespace().collect();
    assert_eq!(&totals[..2], ["Team", "Totals"]);
    assert_eq!(totals[6], ".267");

    assert!(lines.contains(&"Pitchers"));
}
