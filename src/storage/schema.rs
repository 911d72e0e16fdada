//! Database schema and connection management

use crate::error::{Result, StatsError};
use crate::DB_PATH_ENV_VAR;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Columns every table must carry, with the declaration used to add them.
///
/// Startup adds any of these that an older database lacks. Columns are only
/// ever appended, never dropped or renamed.
pub const EXPECTED_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "hitters",
        &[
            ("games", "INTEGER DEFAULT 0"),
            ("ab", "INTEGER DEFAULT 0"),
            ("aba", "INTEGER DEFAULT 0"),
            ("hits", "INTEGER DEFAULT 0"),
            ("runs", "INTEGER DEFAULT 0"),
            ("doubles", "INTEGER DEFAULT 0"),
            ("triples", "INTEGER DEFAULT 0"),
            ("hr", "INTEGER DEFAULT 0"),
            ("rbi", "INTEGER DEFAULT 0"),
            ("k", "INTEGER DEFAULT 0"),
            ("bb", "INTEGER DEFAULT 0"),
            ("sb", "INTEGER DEFAULT 0"),
            ("cs", "INTEGER DEFAULT 0"),
            ("gidp", "INTEGER DEFAULT 0"),
            ("err", "INTEGER DEFAULT 0"),
        ],
    ),
    (
        "pitchers",
        &[
            ("games", "INTEGER DEFAULT 0"),
            ("st", "INTEGER DEFAULT 0"),
            ("ip", "REAL DEFAULT 0"),
            ("ipa", "REAL DEFAULT 0"),
            ("wins", "INTEGER DEFAULT 0"),
            ("losses", "INTEGER DEFAULT 0"),
            ("saves", "INTEGER DEFAULT 0"),
            ("holds", "INTEGER DEFAULT 0"),
            ("hits", "INTEGER DEFAULT 0"),
            ("er", "INTEGER DEFAULT 0"),
            ("hr", "INTEGER DEFAULT 0"),
            ("k", "INTEGER DEFAULT 0"),
            ("bb", "INTEGER DEFAULT 0"),
            ("wp", "INTEGER DEFAULT 0"),
            ("err", "INTEGER DEFAULT 0"),
        ],
    ),
];

/// Single long-lived connection to the stats store
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the database at `path` and bring its schema up to date
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory store, used by tests and restore dry-runs
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub(super) fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        db.update_schema()?;
        Ok(db)
    }

    /// Resolve the database path: explicit flag, then env var, then the
    /// user's data directory
    pub fn database_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let data_dir = data_dir().ok_or(StatsError::NoDataDir)?;
        Ok(data_dir.join("stratstats").join("stratstats.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                team_name TEXT NOT NULL UNIQUE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS hitters (
                id INTEGER PRIMARY KEY,
                team_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                games INTEGER DEFAULT 0,
                ab INTEGER DEFAULT 0,
                aba INTEGER DEFAULT 0,
                hits INTEGER DEFAULT 0,
                runs INTEGER DEFAULT 0,
                doubles INTEGER DEFAULT 0,
                triples INTEGER DEFAULT 0,
                hr INTEGER DEFAULT 0,
                rbi INTEGER DEFAULT 0,
                k INTEGER DEFAULT 0,
                bb INTEGER DEFAULT 0,
                sb INTEGER DEFAULT 0,
                cs INTEGER DEFAULT 0,
                gidp INTEGER DEFAULT 0,
                err INTEGER DEFAULT 0,
                UNIQUE (team_id, first_name, last_name),
                FOREIGN KEY (team_id) REFERENCES teams(id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS pitchers (
                id INTEGER PRIMARY KEY,
                team_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                games INTEGER DEFAULT 0,
                st INTEGER DEFAULT 0,
                ip REAL DEFAULT 0,
                ipa REAL DEFAULT 0,
                wins INTEGER DEFAULT 0,
                losses INTEGER DEFAULT 0,
                saves INTEGER DEFAULT 0,
                holds INTEGER DEFAULT 0,
                hits INTEGER DEFAULT 0,
                er INTEGER DEFAULT 0,
                hr INTEGER DEFAULT 0,
                k INTEGER DEFAULT 0,
                bb INTEGER DEFAULT 0,
                wp INTEGER DEFAULT 0,
                err INTEGER DEFAULT 0,
                UNIQUE (team_id, first_name, last_name),
                FOREIGN KEY (team_id) REFERENCES teams(id) ON DELETE CASCADE
            )",
            [],
        )?;

        // Listings and reports always filter by team and sort by last name
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_hitters_team_last
             ON hitters(team_id, last_name)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_pitchers_team_last
             ON pitchers(team_id, last_name)",
            [],
        )?;

        Ok(())
    }

    /// Append any expected column missing from an older database.
    ///
    /// Returns the number of columns added.
    pub(crate) fn update_schema(&mut self) -> Result<usize> {
        let mut added = 0;
        for (table, columns) in EXPECTED_COLUMNS {
            for (column, decl) in columns.iter() {
                if self.ensure_column_exists(table, column, decl)? {
                    added += 1;
                }
            }
        }
        if added > 0 {
            info!("Schema updated: {} column(s) added", added);
        }
        Ok(added)
    }

    /// Add `column` to `table` unless it already exists. Returns true when added.
    pub(crate) fn ensure_column_exists(
        &mut self,
        table: &str,
        column: &str,
        decl: &str,
    ) -> Result<bool> {
        let existing = self.table_columns(table)?;
        if existing.iter().any(|c| c == column) {
            return Ok(false);
        }

        debug!("Adding column {}.{} ({})", table, column, decl);
        self.conn.execute(
            &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, decl),
            [],
        )?;
        Ok(true)
    }

    /// Column names of `table`, in declaration order
    pub fn table_columns(&self, table: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }
        Ok(columns)
    }
}
