//! Player entry handlers: save, list, select and show.

use super::{resolve_team, CommandContext};
use crate::{
    cli::{HitterFields, PitcherFields},
    editor::{save_batter, save_pitcher, UpsertOutcome},
    listing::{list_players, select_entry},
    storage::{BatterCounters, PitcherCounters, PitcherValue, Quota, StatsDatabase},
    Result, Role, StatsError, TeamId,
};
use tracing::debug;

fn print_listing(db: &StatsDatabase, team_id: TeamId, role: Role) -> Result<()> {
    for line in list_players(db, team_id, role)? {
        println!("{}", line);
    }
    Ok(())
}

fn report_outcome(outcome: UpsertOutcome) {
    if let UpsertOutcome::RejectedBlankField { field } = outcome {
        debug!("Update rejected: '{}' would overwrite a stored value with 0", field);
    }
    println!("{}", outcome.message());
}

/// Save a hitter, then show the refreshed hitter list
pub fn handle_save_hitter(ctx: &mut CommandContext, fields: &HitterFields) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, fields.player.team.as_deref())?;
    let outcome = save_batter(
        db,
        team.id,
        &fields.player.first,
        &fields.player.last,
        fields.counters(),
    )?;
    report_outcome(outcome);
    print_listing(db, team.id, Role::Hitter)
}

/// Save a pitcher, then show the refreshed pitcher list
pub fn handle_save_pitcher(ctx: &mut CommandContext, fields: &PitcherFields) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, fields.player.team.as_deref())?;
    let outcome = save_pitcher(
        db,
        team.id,
        &fields.player.first,
        &fields.player.last,
        fields.counters(),
    )?;
    report_outcome(outcome);
    print_listing(db, team.id, Role::Pitcher)
}

pub fn handle_list(
    ctx: &mut CommandContext,
    team: Option<&str>,
    role: Role,
    as_json: bool,
) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, team)?;
    if as_json {
        let json = match role {
            Role::Hitter => serde_json::to_string_pretty(&db.list_batters(team.id)?)?,
            Role::Pitcher => serde_json::to_string_pretty(&db.list_pitchers(team.id)?)?,
        };
        println!("{}", json);
        return Ok(());
    }
    print_listing(db, team.id, role)
}

/// Pick a listed player and show their quota, the only field a selection
/// brings back
pub fn handle_select(
    ctx: &mut CommandContext,
    team: Option<&str>,
    role: Role,
    entry: &str,
) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, team)?;
    let selection = select_entry(db, team.id, role, entry)?;
    println!("{} {}", selection.first_name, selection.last_name);
    match selection.quota {
        Quota::AtBats(n) => println!("ABA: {}", n),
        Quota::Innings(ip) => println!("IPA: {:.1}", ip),
    }
    Ok(())
}

/// Every stored counter for one player, one `column: value` per line
pub fn batter_details(counters: &BatterCounters) -> Vec<String> {
    BatterCounters::COLUMNS
        .iter()
        .zip(counters.values())
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect()
}

/// Every stored counter for one player, one `column: value` per line
pub fn pitcher_details(counters: &PitcherCounters) -> Vec<String> {
    PitcherCounters::COLUMNS
        .iter()
        .zip(counters.values())
        .map(|(column, value)| match value {
            PitcherValue::Count(n) => format!("{}: {}", column, n),
            PitcherValue::Innings(ip) => format!("{}: {:.1}", column, ip),
        })
        .collect()
}

pub fn handle_show(
    ctx: &mut CommandContext,
    team: Option<&str>,
    role: Role,
    first_name: &str,
    last_name: &str,
    as_json: bool,
) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, team)?;
    let not_found = || StatsError::PlayerNotFound {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    };

    match role {
        Role::Hitter => {
            let record = db
                .get_batter(team.id, first_name, last_name)?
                .ok_or_else(not_found)?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }
            println!("{} {} ({})", record.first_name, record.last_name, team.name);
            for line in batter_details(&record.counters) {
                println!("  {}", line);
            }
        }
        Role::Pitcher => {
            let record = db
                .get_pitcher(team.id, first_name, last_name)?
                .ok_or_else(not_found)?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }
            println!("{} {} ({})", record.first_name, record.last_name, team.name);
            for line in pitcher_details(&record.counters) {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}
