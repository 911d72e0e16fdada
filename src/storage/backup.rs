//! Logical backup and restore.
//!
//! A backup is plain SQL text: table definitions, one `INSERT` per row, then
//! index definitions, all inside a single transaction. Replaying it into an
//! empty database reconstructs the store.

use super::schema::StatsDatabase;
use crate::error::{Result, StatsError};
use rusqlite::{types::ValueRef, Connection};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

impl StatsDatabase {
    /// Render the full contents of the store as replayable SQL
    pub fn dump_sql(&self) -> Result<String> {
        let mut out = String::from("BEGIN TRANSACTION;\n");

        let tables = self.schema_objects("type = 'table'")?;
        for (name, sql) in &tables {
            if name == "sqlite_sequence" {
                out.push_str("DELETE FROM \"sqlite_sequence\";\n");
            } else if name.starts_with("sqlite_") {
                continue;
            } else {
                let _ = writeln!(out, "{};", sql);
            }
            self.dump_rows(name, &mut out)?;
        }

        for (_, sql) in self.schema_objects("type IN ('index', 'trigger', 'view')")? {
            let _ = writeln!(out, "{};", sql);
        }

        out.push_str("COMMIT;\n");
        Ok(out)
    }

    /// Write a backup to `path`, replacing any existing file
    pub fn write_backup(&self, path: &Path) -> Result<()> {
        let sql = self.dump_sql()?;
        std::fs::write(path, sql)?;
        info!("Database backup saved to {}", path.display());
        Ok(())
    }

    /// Rebuild a store at `path` from backup SQL.
    ///
    /// The target must not already hold a database.
    pub fn restore(path: &Path, sql: &str) -> Result<Self> {
        let occupied = std::fs::metadata(path)
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if occupied {
            return Err(StatsError::StoreNotEmpty {
                path: path.display().to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::replay(Connection::open(path)?, sql)
    }

    /// Rebuild an in-memory store from backup SQL
    pub fn restore_in_memory(sql: &str) -> Result<Self> {
        Self::replay(Connection::open_in_memory()?, sql)
    }

    fn replay(conn: Connection, sql: &str) -> Result<Self> {
        // Tables are dumped by name, so children can precede their parents
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        conn.execute_batch(sql)?;
        Self::from_connection(conn)
    }

    /// (name, sql) of schema objects matching `filter`, by name
    fn schema_objects(&self, filter: &str) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT name, sql FROM sqlite_master
             WHERE sql NOT NULL AND {}
             ORDER BY name",
            filter
        ))?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut objects = Vec::new();
        for row in rows {
            objects.push(row?);
        }
        Ok(objects)
    }

    fn dump_rows(&self, table: &str, out: &mut String) -> Result<()> {
        let quoted = quote_identifier(table);
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} ORDER BY rowid", quoted))?;
        let width = stmt.column_count();
        let mut rows = stmt.query([])?;

        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                values.push(sql_literal(row.get_ref(idx)?));
            }
            let _ = writeln!(
                out,
                "INSERT INTO {} VALUES({});",
                quoted,
                values.join(",")
            );
        }
        Ok(())
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Render a stored value as a SQL literal that reads back identically
fn sql_literal(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) if f.is_infinite() => {
            if f > 0.0 {
                "9e999".to_string()
            } else {
                "-9e999".to_string()
            }
        }
        // Debug keeps a decimal point so the value stays REAL on replay
        ValueRef::Real(f) => format!("{:?}", f),
        ValueRef::Text(t) => format!("'{}'", String::from_utf8_lossy(t).replace('\'', "''")),
        ValueRef::Blob(b) => {
            let mut hex = String::with_capacity(b.len() * 2 + 3);
            hex.push_str("X'");
            for byte in b {
                let _ = write!(hex, "{:02X}", byte);
            }
            hex.push('\'');
            hex
        }
    }
}
