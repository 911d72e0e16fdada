//! Command implementations for the stratstats CLI

pub mod common;
pub mod entry;
pub mod maintenance;
pub mod report;
pub mod team;

use crate::{
    storage::{StatsDatabase, Team},
    Result,
};
use chrono::NaiveDate;

pub use common::CommandContext;

/// Resolve the team a command operates on.
///
/// A missing or blank `--team` aborts with `NoTeamSelected`.
pub fn resolve_team(db: &StatsDatabase, team: Option<&str>) -> Result<Team> {
    db.require_team(team.unwrap_or(""))
}

/// Default backup file name for `date`: `stratstats_backup_YYYYMMDD.sql`
pub fn default_backup_name(date: NaiveDate) -> String {
    format!("stratstats_backup_{}.sql", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests;
