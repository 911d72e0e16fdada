//! Argument parsing tests

use clap::Parser;
use stratstats::{
    cli::{Commands, SaveCmd, StratStats, TeamCmd},
    Role,
};

#[test]
fn test_save_hitter_fields_default_to_blank() {
    let app = StratStats::try_parse_from([
        "stratstats", "save", "hitter", "--team", "Sluggers", "--first", "Ann", "--last", "Able",
        "--ab", "40", "--hits", "12",
    ])
    .unwrap();

    let Commands::Save {
        cmd: SaveCmd::Hitter(fields),
    } = app.command
    else {
        panic!("Expected save hitter");
    };
    assert_eq!(fields.player.team.as_deref(), Some("Sluggers"));
    assert_eq!(fields.walks, "");

    let counters = fields.counters();
    assert_eq!(counters.at_bats, 40);
    assert_eq!(counters.hits, 12);
    assert_eq!(counters.walks, 0);
}

#[test]
fn test_save_pitcher_accepts_malformed_numbers() {
    let app = StratStats::try_parse_from([
        "stratstats", "save", "pitcher", "--team", "Sluggers", "--first", "Cy", "--last", "Young",
        "--ip", "6.1", "--er", "-2", "--k", "lots",
    ])
    .unwrap();

    let Commands::Save {
        cmd: SaveCmd::Pitcher(fields),
    } = app.command
    else {
        panic!("Expected save pitcher");
    };
    let counters = fields.counters();
    assert!((counters.innings_pitched - 6.1).abs() < 1e-9);
    assert_eq!(counters.earned_runs, 0);
    assert_eq!(counters.strikeouts, 0);
}

#[test]
fn test_role_parsing() {
    let app =
        StratStats::try_parse_from(["stratstats", "list", "--team", "Sluggers", "--role", "P"])
            .unwrap();
    match app.command {
        Commands::List { role, json, .. } => {
            assert_eq!(role, Role::Pitcher);
            assert!(!json);
        }
        other => panic!("Expected list, got {:?}", other),
    }

    let app = StratStats::try_parse_from(["stratstats", "list"]).unwrap();
    match app.command {
        Commands::List { team, role, .. } => {
            assert_eq!(team, None);
            assert_eq!(role, Role::Hitter);
        }
        other => panic!("Expected list, got {:?}", other),
    }

    assert!(StratStats::try_parse_from(["stratstats", "list", "--role", "catcher"]).is_err());
}

#[test]
fn test_global_flags() {
    let app = StratStats::try_parse_from([
        "stratstats", "team", "list", "--db", "/tmp/x.db", "--verbose",
    ])
    .unwrap();
    assert!(app.verbose);
    assert_eq!(app.db.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
    assert!(matches!(app.command, Commands::Team { cmd: TeamCmd::List }));
}

#[test]
fn test_destructive_commands_need_yes() {
    let app = StratStats::try_parse_from(["stratstats", "reset-db"]).unwrap();
    assert!(matches!(app.command, Commands::ResetDb { yes: false }));

    let app = StratStats::try_parse_from(["stratstats", "team", "delete", "Sluggers", "--yes"])
        .unwrap();
    assert!(matches!(
        app.command,
        Commands::Team {
            cmd: TeamCmd::Delete { yes: true, .. }
        }
    ));
}
