//! Team create / delete / list handlers

use super::CommandContext;
use crate::{Result, StatsError};
use tracing::info;

pub fn handle_team_create(ctx: &mut CommandContext, name: &str) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let name = name.trim();
    if name.is_empty() {
        println!("Team name cannot be empty.");
        return Ok(());
    }

    let team = db.create_team(name)?;
    info!("Created team {} ({})", team.name, team.id);
    println!("Team '{}' created.", team.name);
    Ok(())
}

/// Delete a team and everything filed under it. Without `confirmed` this only
/// explains what would happen.
pub fn handle_team_delete(ctx: &mut CommandContext, name: &str, confirmed: bool) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    if !confirmed {
        println!(
            "Deleting '{}' also deletes all of its hitters and pitchers. Re-run with --yes to confirm.",
            name
        );
        return Ok(());
    }

    if !db.delete_team(name)? {
        return Err(StatsError::TeamNotFound {
            name: name.to_string(),
        });
    }
    info!("Deleted team {}", name);
    println!("Team '{}' deleted.", name);
    Ok(())
}

pub fn handle_team_list(ctx: &mut CommandContext) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let teams = db.list_teams()?;
    if teams.is_empty() {
        println!("No teams yet. Create one with `stratstats team create <NAME>`.");
    }
    for team in teams {
        println!("{}", team.name);
    }
    Ok(())
}
