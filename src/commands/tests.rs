//! Integration tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::{
        commands::{
            entry::{batter_details, handle_save_hitter, handle_select, pitcher_details},
            maintenance::{handle_backup, handle_import, handle_reset, handle_restore, import_players},
            report::handle_report,
            team::{handle_team_create, handle_team_delete},
        },
        cli::{HitterFields, PlayerArgs},
        storage::{BatterCounters, PitcherCounters},
        Role, StatsError,
    };
    use tempfile::TempDir;

    fn context_with_team(name: &str) -> CommandContext {
        let mut db = StatsDatabase::new_in_memory().unwrap();
        db.create_team(name).unwrap();
        CommandContext::from_database(db)
    }

    fn hitter_fields(team: Option<&str>, ab: &str, hits: &str) -> HitterFields {
        HitterFields {
            player: PlayerArgs {
                team: team.map(str::to_string),
                first: "Ann".to_string(),
                last: "Able".to_string(),
            },
            games: String::new(),
            at_bats: ab.to_string(),
            at_bats_available: "120".to_string(),
            hits: hits.to_string(),
            runs: String::new(),
            doubles: String::new(),
            triples: String::new(),
            home_runs: String::new(),
            rbi: String::new(),
            strikeouts: String::new(),
            walks: String::new(),
            stolen_bases: String::new(),
            caught_stealing: String::new(),
            gidp: String::new(),
            errors: String::new(),
        }
    }

    #[test]
    fn test_resolve_team_requires_selection() {
        let mut ctx = context_with_team("Sluggers");
        let db = ctx.store().unwrap();

        assert!(matches!(
            resolve_team(db, None),
            Err(StatsError::NoTeamSelected)
        ));
        assert!(matches!(
            resolve_team(db, Some("  ")),
            Err(StatsError::NoTeamSelected)
        ));
        assert!(matches!(
            resolve_team(db, Some("Nobody")),
            Err(StatsError::TeamNotFound { .. })
        ));
        assert_eq!(resolve_team(db, Some("Sluggers")).unwrap().name, "Sluggers");
    }

    #[test]
    fn test_default_backup_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(default_backup_name(date), "stratstats_backup_20240309.sql");
    }

    #[test]
    fn test_disconnected_context_is_noop() {
        let mut ctx = CommandContext::disconnected();
        assert!(!ctx.is_connected());

        assert!(handle_team_create(&mut ctx, "Sluggers").is_ok());
        assert!(handle_save_hitter(&mut ctx, &hitter_fields(None, "1", "1")).is_ok());
        assert!(handle_report(&mut ctx, Some("Sluggers"), None, false).is_ok());
        assert!(handle_reset(&mut ctx, true).is_ok());
    }

    #[test]
    fn test_open_failure_leaves_context_disconnected() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened as a database file
        let ctx = CommandContext::open(dir.path());
        assert!(!ctx.is_connected());
    }

    #[test]
    fn test_team_create_and_delete() {
        let mut ctx = CommandContext::from_database(StatsDatabase::new_in_memory().unwrap());
        handle_team_create(&mut ctx, "  Sluggers ").unwrap();
        handle_team_create(&mut ctx, "").unwrap();
        assert_eq!(ctx.store().unwrap().list_teams().unwrap().len(), 1);

        assert!(matches!(
            handle_team_create(&mut ctx, "Sluggers"),
            Err(StatsError::DuplicateTeam { .. })
        ));

        // Unconfirmed delete leaves the team in place
        handle_team_delete(&mut ctx, "Sluggers", false).unwrap();
        assert!(ctx.store().unwrap().find_team("Sluggers").unwrap().is_some());

        handle_team_delete(&mut ctx, "Sluggers", true).unwrap();
        assert!(ctx.store().unwrap().find_team("Sluggers").unwrap().is_none());
        assert!(matches!(
            handle_team_delete(&mut ctx, "Sluggers", true),
            Err(StatsError::TeamNotFound { .. })
        ));
    }

    #[test]
    fn test_save_hitter_coerces_form_text() {
        let mut ctx = context_with_team("Sluggers");
        handle_save_hitter(&mut ctx, &hitter_fields(Some("Sluggers"), " 40 ", "twelve")).unwrap();

        let db = ctx.store().unwrap();
        let team = db.require_team("Sluggers").unwrap();
        let stored = db.get_batter(team.id, "Ann", "Able").unwrap().unwrap();
        assert_eq!(stored.counters.at_bats, 40);
        assert_eq!(stored.counters.hits, 0);
        assert_eq!(stored.counters.at_bats_available, 120);
    }

    #[test]
    fn test_save_without_team_aborts() {
        let mut ctx = context_with_team("Sluggers");
        assert!(matches!(
            handle_save_hitter(&mut ctx, &hitter_fields(None, "40", "12")),
            Err(StatsError::NoTeamSelected)
        ));
    }

    #[test]
    fn test_select_missing_entry_is_error() {
        let mut ctx = context_with_team("Sluggers");
        assert!(matches!(
            handle_select(&mut ctx, Some("Sluggers"), Role::Hitter, "Cher"),
            Err(StatsError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn test_detail_lines_name_every_column() {
        let batter = BatterCounters {
            hits: 12,
            ..Default::default()
        };
        let lines = batter_details(&batter);
        assert_eq!(lines.len(), 15);
        assert!(lines.contains(&"hits: 12".to_string()));

        let pitcher = PitcherCounters {
            innings_pitched: 6.1,
            ..Default::default()
        };
        let lines = pitcher_details(&pitcher);
        assert_eq!(lines.len(), 15);
        assert!(lines.contains(&"ip: 6.1".to_string()));
    }

    #[test]
    fn test_report_export_matches_printed_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sluggers.txt");
        let mut ctx = context_with_team("Sluggers");
        handle_save_hitter(&mut ctx, &hitter_fields(Some("Sluggers"), "10", "3")).unwrap();

        handle_report(&mut ctx, Some("Sluggers"), Some(&path), false).unwrap();

        let exported = std::fs::read_to_string(&path).unwrap();
        let db = ctx.store().unwrap();
        let team = db.require_team("Sluggers").unwrap();
        let expected = crate::report::TeamReport::load(db, team).unwrap().to_text();
        assert_eq!(exported, expected);
        assert!(exported.contains("A. Able"));
    }

    #[test]
    fn test_import_accumulates_and_replaces_quota() {
        let mut ctx = context_with_team("Sluggers");
        handle_save_hitter(&mut ctx, &hitter_fields(Some("Sluggers"), "40", "12")).unwrap();

        let json = r#"[
            {"first_name": "Ann", "last_name": "Able", "at_bats": 10, "hits": 4, "at_bats_available": 150},
            {"first_name": "Bob", "last_name": "Baker", "at_bats": 5}
        ]"#;
        let db = ctx.store().unwrap();
        let summary = import_players(db, Some("Sluggers"), Role::Hitter, json).unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.merged, 1);

        let team = db.require_team("Sluggers").unwrap();
        let ann = db.get_batter(team.id, "Ann", "Able").unwrap().unwrap();
        assert_eq!(ann.counters.at_bats, 50);
        assert_eq!(ann.counters.hits, 16);
        assert_eq!(ann.counters.at_bats_available, 150);
    }

    #[test]
    fn test_import_bad_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pitchers.json");
        std::fs::write(&path, r#"[{"first_name": "Cy", "last_name": "Young", "ip": "#).unwrap();

        let mut ctx = context_with_team("Sluggers");
        assert!(matches!(
            handle_import(&mut ctx, Some("Sluggers"), Role::Pitcher, &path),
            Err(StatsError::Json(_))
        ));
        let db = ctx.store().unwrap();
        let team = db.require_team("Sluggers").unwrap();
        assert!(db.list_pitchers(team.id).unwrap().is_empty());
    }

    #[test]
    fn test_backup_then_restore() {
        let dir = TempDir::new().unwrap();
        let backup = dir.path().join("backup.sql");
        let target = dir.path().join("restored.db");

        let mut ctx = context_with_team("Sluggers");
        handle_save_hitter(&mut ctx, &hitter_fields(Some("Sluggers"), "40", "12")).unwrap();
        handle_backup(&mut ctx, Some(&backup)).unwrap();
        assert!(std::fs::read_to_string(&backup)
            .unwrap()
            .starts_with("BEGIN TRANSACTION;"));

        handle_restore(&backup, &target).unwrap();
        let restored = StatsDatabase::open(&target).unwrap();
        let team = restored.require_team("Sluggers").unwrap();
        let ann = restored.get_batter(team.id, "Ann", "Able").unwrap().unwrap();
        assert_eq!(ann.counters.at_bats, 40);

        // The restored file now exists, so a second restore is refused
        assert!(matches!(
            handle_restore(&backup, &target),
            Err(StatsError::StoreNotEmpty { .. })
        ));
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut ctx = context_with_team("Sluggers");
        handle_reset(&mut ctx, false).unwrap();
        assert_eq!(ctx.store().unwrap().list_teams().unwrap().len(), 1);

        handle_reset(&mut ctx, true).unwrap();
        assert!(ctx.store().unwrap().list_teams().unwrap().is_empty());
    }
}
