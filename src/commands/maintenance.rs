//! Backup, restore, batch import and reset.

use super::{default_backup_name, resolve_team, CommandContext};
use crate::{
    storage::{BatterRecord, ImportBatter, ImportPitcher, PitcherRecord, StatsDatabase},
    Result, Role,
};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Totals from a batch import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub merged: usize,
}

/// Dump the store to `output`, or to today's default file name
pub fn handle_backup(ctx: &mut CommandContext, output: Option<&Path>) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_backup_name(Local::now().date_naive())));
    db.write_backup(&path)?;
    println!("Database backed up to {}", path.display());
    Ok(())
}

/// Rebuild a store at `target` from a backup file. Runs before any store is
/// opened, since the target must not exist yet.
pub fn handle_restore(backup: &Path, target: &Path) -> Result<()> {
    let sql = std::fs::read_to_string(backup)?;
    let db = StatsDatabase::restore(target, &sql)?;
    let teams = db.list_teams()?;
    info!(
        "Restored {} team(s) from {} into {}",
        teams.len(),
        backup.display(),
        target.display()
    );
    println!("Database restored to {}", target.display());
    Ok(())
}

/// Add every entry in a JSON array onto the team's players.
///
/// Counters accumulate onto existing players, the quota is replaced and
/// unknown players are inserted. Either the whole file lands or nothing does.
pub fn import_players(
    db: &mut StatsDatabase,
    team_name: Option<&str>,
    role: Role,
    json: &str,
) -> Result<ImportSummary> {
    let team = resolve_team(db, team_name)?;

    let outcomes: Vec<bool> = match role {
        Role::Hitter => {
            let entries: Vec<ImportBatter> = serde_json::from_str(json)?;
            db.in_transaction(|db| {
                entries
                    .into_iter()
                    .map(|e| {
                        db.accumulate_batter(&BatterRecord {
                            team_id: team.id,
                            first_name: e.first_name,
                            last_name: e.last_name,
                            counters: e.counters,
                        })
                    })
                    .collect()
            })?
        }
        Role::Pitcher => {
            let entries: Vec<ImportPitcher> = serde_json::from_str(json)?;
            db.in_transaction(|db| {
                entries
                    .into_iter()
                    .map(|e| {
                        db.accumulate_pitcher(&PitcherRecord {
                            team_id: team.id,
                            first_name: e.first_name,
                            last_name: e.last_name,
                            counters: e.counters,
                        })
                    })
                    .collect()
            })?
        }
    };

    let inserted = outcomes.iter().filter(|&&new| new).count();
    let summary = ImportSummary {
        inserted,
        merged: outcomes.len() - inserted,
    };
    debug!("Import into {}: {:?}", team.name, summary);
    Ok(summary)
}

pub fn handle_import(
    ctx: &mut CommandContext,
    team: Option<&str>,
    role: Role,
    file: &Path,
) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let json = std::fs::read_to_string(file)?;
    let summary = import_players(db, team, role, &json)?;
    println!(
        "Imported {} {}(s): {} new, {} merged.",
        summary.inserted + summary.merged,
        role.to_string().to_lowercase(),
        summary.inserted,
        summary.merged
    );
    Ok(())
}

/// Delete every team and player. Without `confirmed` this only warns.
pub fn handle_reset(ctx: &mut CommandContext, confirmed: bool) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    if !confirmed {
        println!("This deletes ALL teams and player stats. Re-run with --yes to confirm.");
        return Ok(());
    }

    db.clear_all_data()?;
    info!("All teams and player stats deleted");
    println!("Database has been reset.");
    Ok(())
}
