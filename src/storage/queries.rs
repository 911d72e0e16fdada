//! Basic database query operations

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{Role, TeamId};
use crate::error::{Result, StatsError};
use rusqlite::{params, types::ValueRef, OptionalExtension, Row};
use tracing::{debug, info};

const BATTER_SELECT: &str = "SELECT team_id, first_name, last_name,
        games, ab, aba, hits, runs, doubles, triples, hr, rbi, k, bb, sb, cs, gidp, err
     FROM hitters";

const PITCHER_SELECT: &str = "SELECT team_id, first_name, last_name,
        games, st, ip, ipa, wins, losses, saves, holds, hits, er, hr, k, bb, wp, err
     FROM pitchers";

impl StatsDatabase {
    /// Create a team. Names are unique.
    pub fn create_team(&mut self, name: &str) -> Result<Team> {
        if self.find_team(name)?.is_some() {
            return Err(StatsError::DuplicateTeam {
                name: name.to_string(),
            });
        }

        self.conn
            .execute("INSERT INTO teams (team_name) VALUES (?)", params![name])?;
        let id = TeamId::new(self.conn.last_insert_rowid());
        info!("Created team '{}' ({})", name, id);

        Ok(Team {
            id,
            name: name.to_string(),
        })
    }

    /// All teams in creation order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, team_name FROM teams ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Look up a team by exact name
    pub fn find_team(&self, name: &str) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT id, team_name FROM teams WHERE team_name = ?",
                params![name],
                |row| {
                    Ok(Team {
                        id: TeamId::new(row.get(0)?),
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(team)
    }

    /// Look up the team a command is scoped to.
    ///
    /// A blank name means nothing was selected.
    pub fn require_team(&self, name: &str) -> Result<Team> {
        if name.trim().is_empty() {
            return Err(StatsError::NoTeamSelected);
        }
        self.find_team(name)?
            .ok_or_else(|| StatsError::TeamNotFound {
                name: name.to_string(),
            })
    }

    /// Delete a team together with all of its batters and pitchers.
    ///
    /// Returns false when no team has that name.
    pub fn delete_team(&mut self, name: &str) -> Result<bool> {
        let Some(team) = self.find_team(name)? else {
            return Ok(false);
        };

        let tx = self.conn.transaction()?;
        let hitters = tx.execute(
            "DELETE FROM hitters WHERE team_id = ?",
            params![team.id.as_i64()],
        )?;
        let pitchers = tx.execute(
            "DELETE FROM pitchers WHERE team_id = ?",
            params![team.id.as_i64()],
        )?;
        tx.execute("DELETE FROM teams WHERE id = ?", params![team.id.as_i64()])?;
        tx.commit()?;

        info!(
            "Deleted team '{}' with {} hitter(s) and {} pitcher(s)",
            name, hitters, pitchers
        );
        Ok(true)
    }

    /// Remove every team and player record
    pub fn clear_all_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM hitters", [])?;
        tx.execute("DELETE FROM pitchers", [])?;
        tx.execute("DELETE FROM teams", [])?;
        tx.commit()?;
        Ok(())
    }

    /// Load one batter by (team, first, last)
    pub fn get_batter(
        &self,
        team_id: TeamId,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<BatterRecord>> {
        let sql = format!(
            "{} WHERE team_id = ? AND first_name = ? AND last_name = ?",
            BATTER_SELECT
        );
        let record = self
            .conn
            .query_row(
                &sql,
                params![team_id.as_i64(), first_name, last_name],
                row_to_batter,
            )
            .optional()?;
        Ok(record)
    }

    /// Load one pitcher by (team, first, last)
    pub fn get_pitcher(
        &self,
        team_id: TeamId,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<PitcherRecord>> {
        let sql = format!(
            "{} WHERE team_id = ? AND first_name = ? AND last_name = ?",
            PITCHER_SELECT
        );
        let record = self
            .conn
            .query_row(
                &sql,
                params![team_id.as_i64(), first_name, last_name],
                row_to_pitcher,
            )
            .optional()?;
        Ok(record)
    }

    pub fn insert_batter(&mut self, record: &BatterRecord) -> Result<()> {
        let c = &record.counters;
        self.conn.execute(
            "INSERT INTO hitters
             (team_id, first_name, last_name, games, ab, aba, hits, runs, doubles, triples,
              hr, rbi, k, bb, sb, cs, gidp, err)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.team_id.as_i64(),
                record.first_name,
                record.last_name,
                c.games,
                c.at_bats,
                c.at_bats_available,
                c.hits,
                c.runs,
                c.doubles,
                c.triples,
                c.home_runs,
                c.rbi,
                c.strikeouts,
                c.walks,
                c.stolen_bases,
                c.caught_stealing,
                c.gidp,
                c.errors
            ],
        )?;
        debug!("Inserted hitter {} {}", record.first_name, record.last_name);
        Ok(())
    }

    /// Overwrite every counter of an existing batter. Returns rows changed.
    pub fn update_batter(&mut self, record: &BatterRecord) -> Result<usize> {
        let c = &record.counters;
        let rows = self.conn.execute(
            "UPDATE hitters SET games = ?, ab = ?, aba = ?, hits = ?, runs = ?, doubles = ?,
                    triples = ?, hr = ?, rbi = ?, k = ?, bb = ?, sb = ?, cs = ?, gidp = ?, err = ?
             WHERE team_id = ? AND first_name = ? AND last_name = ?",
            params![
                c.games,
                c.at_bats,
                c.at_bats_available,
                c.hits,
                c.runs,
                c.doubles,
                c.triples,
                c.home_runs,
                c.rbi,
                c.strikeouts,
                c.walks,
                c.stolen_bases,
                c.caught_stealing,
                c.gidp,
                c.errors,
                record.team_id.as_i64(),
                record.first_name,
                record.last_name
            ],
        )?;
        debug!("Updated hitter {} {}", record.first_name, record.last_name);
        Ok(rows)
    }

    pub fn insert_pitcher(&mut self, record: &PitcherRecord) -> Result<()> {
        let c = &record.counters;
        self.conn.execute(
            "INSERT INTO pitchers
             (team_id, first_name, last_name, games, st, ip, ipa, wins, losses, saves, holds,
              hits, er, hr, k, bb, wp, err)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.team_id.as_i64(),
                record.first_name,
                record.last_name,
                c.games,
                c.games_started,
                c.innings_pitched,
                c.innings_available,
                c.wins,
                c.losses,
                c.saves,
                c.holds,
                c.hits_allowed,
                c.earned_runs,
                c.home_runs_allowed,
                c.strikeouts,
                c.walks,
                c.wild_pitches,
                c.errors
            ],
        )?;
        debug!("Inserted pitcher {} {}", record.first_name, record.last_name);
        Ok(())
    }

    /// Overwrite every counter of an existing pitcher. Returns rows changed.
    pub fn update_pitcher(&mut self, record: &PitcherRecord) -> Result<usize> {
        let c = &record.counters;
        let rows = self.conn.execute(
            "UPDATE pitchers SET games = ?, st = ?, ip = ?, ipa = ?, wins = ?, losses = ?,
                    saves = ?, holds = ?, hits = ?, er = ?, hr = ?, k = ?, bb = ?, wp = ?, err = ?
             WHERE team_id = ? AND first_name = ? AND last_name = ?",
            params![
                c.games,
                c.games_started,
                c.innings_pitched,
                c.innings_available,
                c.wins,
                c.losses,
                c.saves,
                c.holds,
                c.hits_allowed,
                c.earned_runs,
                c.home_runs_allowed,
                c.strikeouts,
                c.walks,
                c.wild_pitches,
                c.errors,
                record.team_id.as_i64(),
                record.first_name,
                record.last_name
            ],
        )?;
        debug!("Updated pitcher {} {}", record.first_name, record.last_name);
        Ok(rows)
    }

    /// All batters on a team, ordered by last name then entry order
    pub fn list_batters(&self, team_id: TeamId) -> Result<Vec<BatterRecord>> {
        let sql = format!(
            "{} WHERE team_id = ? ORDER BY last_name, id",
            BATTER_SELECT
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![team_id.as_i64()], row_to_batter)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// All pitchers on a team, ordered by last name then entry order
    pub fn list_pitchers(&self, team_id: TeamId) -> Result<Vec<PitcherRecord>> {
        let sql = format!(
            "{} WHERE team_id = ? ORDER BY last_name, id",
            PITCHER_SELECT
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![team_id.as_i64()], row_to_pitcher)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Recover names and the quota field of a player matched by first
    /// initial and exact last name. The first stored match wins.
    pub fn select_quota(
        &self,
        team_id: TeamId,
        role: Role,
        first_initial: char,
        last_name: &str,
    ) -> Result<Option<QuotaSelection>> {
        let quota_column = match role {
            Role::Hitter => "aba",
            Role::Pitcher => "ipa",
        };
        let sql = format!(
            "SELECT first_name, last_name, {} FROM {}
             WHERE team_id = ? AND first_name LIKE ? ESCAPE '\\' AND last_name = ?
             ORDER BY id LIMIT 1",
            quota_column,
            role.table()
        );
        let pattern = format!("{}%", escape_like(first_initial));

        let selection = self
            .conn
            .query_row(
                &sql,
                params![team_id.as_i64(), pattern, last_name],
                |row| {
                    let quota = match role {
                        Role::Hitter => Quota::AtBats(counter(row, 2)?),
                        Role::Pitcher => Quota::Innings(innings(row, 2)?),
                    };
                    Ok(QuotaSelection {
                        first_name: row.get(0)?,
                        last_name: row.get(1)?,
                        quota,
                    })
                },
            )
            .optional()?;
        Ok(selection)
    }

    /// Add counters onto an existing batter, or insert it. The at-bat quota
    /// is replaced rather than added.
    pub fn accumulate_batter(&mut self, record: &BatterRecord) -> Result<bool> {
        match self.get_batter(record.team_id, &record.first_name, &record.last_name)? {
            Some(existing) => {
                let mut merged = BatterCounters::sum([&existing.counters, &record.counters]);
                merged.at_bats_available = record.counters.at_bats_available;
                self.update_batter(&BatterRecord {
                    counters: merged,
                    ..record.clone()
                })?;
                Ok(false)
            }
            None => {
                self.insert_batter(record)?;
                Ok(true)
            }
        }
    }

    /// Add counters onto an existing pitcher, or insert it. The innings
    /// quota is replaced rather than added.
    pub fn accumulate_pitcher(&mut self, record: &PitcherRecord) -> Result<bool> {
        match self.get_pitcher(record.team_id, &record.first_name, &record.last_name)? {
            Some(existing) => {
                let mut merged = PitcherCounters::sum([&existing.counters, &record.counters]);
                merged.innings_available = record.counters.innings_available;
                self.update_pitcher(&PitcherRecord {
                    counters: merged,
                    ..record.clone()
                })?;
                Ok(false)
            }
            None => {
                self.insert_pitcher(record)?;
                Ok(true)
            }
        }
    }

    /// Run `f` inside a transaction, committing only if it succeeds
    pub fn in_transaction<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.conn.execute_batch("BEGIN")?;
        match f(self) {
            Ok(value) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(value)
            }
            Err(e) => {
                // Report the failure that triggered the rollback, not the rollback itself
                let _ = self.conn.execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }
}

fn escape_like(c: char) -> String {
    match c {
        '%' | '_' | '\\' => format!("\\{}", c),
        _ => c.to_string(),
    }
}

/// Read a stored counter. Blank or malformed values read as zero.
fn counter(row: &Row, idx: usize) -> rusqlite::Result<u32> {
    let value = match row.get_ref(idx)? {
        ValueRef::Integer(i) => u32::try_from(i).unwrap_or(0),
        ValueRef::Real(f) if f.is_finite() && f >= 0.0 => f as u32,
        ValueRef::Text(t) => std::str::from_utf8(t)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0),
        _ => 0,
    };
    Ok(value)
}

/// Read stored innings. Blank or malformed values read as zero.
fn innings(row: &Row, idx: usize) -> rusqlite::Result<f64> {
    let value = match row.get_ref(idx)? {
        ValueRef::Integer(i) => i.max(0) as f64,
        ValueRef::Real(f) if f.is_finite() && f >= 0.0 => f,
        ValueRef::Text(t) => std::str::from_utf8(t)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|f| f.is_finite() && *f >= 0.0)
            .unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(value)
}

/// Names stored as NULL by older databases read back as empty strings
fn name(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn row_to_batter(row: &Row) -> rusqlite::Result<BatterRecord> {
    Ok(BatterRecord {
        team_id: TeamId::new(row.get(0)?),
        first_name: name(row, 1)?,
        last_name: name(row, 2)?,
        counters: BatterCounters {
            games: counter(row, 3)?,
            at_bats: counter(row, 4)?,
            at_bats_available: counter(row, 5)?,
            hits: counter(row, 6)?,
            runs: counter(row, 7)?,
            doubles: counter(row, 8)?,
            triples: counter(row, 9)?,
            home_runs: counter(row, 10)?,
            rbi: counter(row, 11)?,
            strikeouts: counter(row, 12)?,
            walks: counter(row, 13)?,
            stolen_bases: counter(row, 14)?,
            caught_stealing: counter(row, 15)?,
            gidp: counter(row, 16)?,
            errors: counter(row, 17)?,
        },
    })
}

fn row_to_pitcher(row: &Row) -> rusqlite::Result<PitcherRecord> {
    Ok(PitcherRecord {
        team_id: TeamId::new(row.get(0)?),
        first_name: name(row, 1)?,
        last_name: name(row, 2)?,
        counters: PitcherCounters {
            games: counter(row, 3)?,
            games_started: counter(row, 4)?,
            innings_pitched: innings(row, 5)?,
            innings_available: innings(row, 6)?,
            wins: counter(row, 7)?,
            losses: counter(row, 8)?,
            saves: counter(row, 9)?,
            holds: counter(row, 10)?,
            hits_allowed: counter(row, 11)?,
            earned_runs: counter(row, 12)?,
            home_runs_allowed: counter(row, 13)?,
            strikeouts: counter(row, 14)?,
            walks: counter(row, 15)?,
            wild_pitches: counter(row, 16)?,
            errors: counter(row, 17)?,
        },
    })
}
