//! Integration tests for file-backed storage

use std::path::Path;
use stratstats::{
    storage::{BatterCounters, BatterRecord, StatsDatabase},
    StatsError, DB_PATH_ENV_VAR,
};
use tempfile::TempDir;

fn ann_able(db: &StatsDatabase) -> BatterRecord {
    let team = db.require_team("Sluggers").unwrap();
    BatterRecord {
        team_id: team.id,
        first_name: "Ann".to_string(),
        last_name: "Able".to_string(),
        counters: BatterCounters {
            at_bats: 40,
            at_bats_available: 120,
            hits: 12,
            ..Default::default()
        },
    }
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("stats.db");

    {
        let mut db = StatsDatabase::open(&path).unwrap();
        db.create_team("Sluggers").unwrap();
        let record = ann_able(&db);
        db.insert_batter(&record).unwrap();
    }

    let db = StatsDatabase::open(&path).unwrap();
    let team = db.require_team("Sluggers").unwrap();
    let stored = db.get_batter(team.id, "Ann", "Able").unwrap().unwrap();
    assert_eq!(stored.counters.hits, 12);
}

#[test]
fn test_reopen_migrates_legacy_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE teams (id INTEGER PRIMARY KEY, team_name TEXT UNIQUE NOT NULL);
             CREATE TABLE pitchers (
                 id INTEGER PRIMARY KEY,
                 team_id INTEGER,
                 first_name TEXT,
                 last_name TEXT,
                 games INTEGER,
                 ip REAL,
                 ipa REAL,
                 er INTEGER
             );
             INSERT INTO teams (team_name) VALUES ('Old Timers');
             INSERT INTO pitchers (team_id, first_name, last_name, games, ip, ipa, er)
                 VALUES (1, 'Cy', 'Young', 4, 27.0, 90.0, 9);",
        )
        .unwrap();
    }

    let db = StatsDatabase::open(&path).unwrap();
    let columns = db.table_columns("pitchers").unwrap();
    for column in ["st", "holds", "wp", "err"] {
        assert!(columns.contains(&column.to_string()), "missing {}", column);
    }

    let team = db.require_team("Old Timers").unwrap();
    let cy = db.get_pitcher(team.id, "Cy", "Young").unwrap().unwrap();
    assert_eq!(cy.counters.earned_runs, 9);
    assert_eq!(cy.counters.holds, 0);
    assert!((cy.counters.era() - 3.0).abs() < 1e-9);
}

#[test]
fn test_database_path_resolution() {
    let explicit = Path::new("/tmp/explicit.db");
    assert_eq!(
        StatsDatabase::database_path(Some(explicit)).unwrap(),
        explicit.to_path_buf()
    );

    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    assert_eq!(
        StatsDatabase::database_path(None).unwrap(),
        Path::new("/tmp/from-env.db").to_path_buf()
    );

    // The flag wins over the environment
    assert_eq!(
        StatsDatabase::database_path(Some(explicit)).unwrap(),
        explicit.to_path_buf()
    );
    std::env::remove_var(DB_PATH_ENV_VAR);

    if let Ok(path) = StatsDatabase::database_path(None) {
        assert!(path.ends_with("stratstats/stratstats.db"));
    }
}

#[test]
fn test_restore_refuses_existing_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.db");

    let mut db = StatsDatabase::open(&path).unwrap();
    db.create_team("Sluggers").unwrap();
    let sql = db.dump_sql().unwrap();

    assert!(matches!(
        StatsDatabase::restore(&path, &sql),
        Err(StatsError::StoreNotEmpty { .. })
    ));

    let copy = dir.path().join("copy.db");
    let restored = StatsDatabase::restore(&copy, &sql).unwrap();
    assert_eq!(restored.list_teams().unwrap(), db.list_teams().unwrap());
}

#[test]
fn test_backup_file_replays_in_sqlite() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.sql");

    let mut db = StatsDatabase::new_in_memory().unwrap();
    db.create_team("O'Neil's Nine").unwrap();
    db.write_backup(&backup).unwrap();

    let sql = std::fs::read_to_string(&backup).unwrap();
    assert!(sql.ends_with("COMMIT;\n"));

    // Plain rusqlite can replay the dump without our restore path
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(&sql).unwrap();
    let name: String = conn
        .query_row("SELECT team_name FROM teams", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "O'Neil's Nine");
}
