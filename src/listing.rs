//! Player listings and entry selection.

use crate::cli::types::{Role, TeamId};
use crate::error::{Result, StatsError};
use crate::stats::{format_era, format_rate};
use crate::storage::{BatterRecord, PitcherRecord, QuotaSelection, StatsDatabase};

/// `"First Last  ABR: <n>  AVG: <avg>"`
pub fn batter_line(record: &BatterRecord) -> String {
    let c = &record.counters;
    format!(
        "{} {}  ABR: {}  AVG: {}",
        record.first_name,
        record.last_name,
        c.at_bats_remaining(),
        format_rate(c.average(), c.at_bats)
    )
}

/// `"First Last  IPR: <ip>  ERA: <era>"`
pub fn pitcher_line(record: &PitcherRecord) -> String {
    let c = &record.counters;
    format!(
        "{} {}  IPR: {:.1}  ERA: {}",
        record.first_name,
        record.last_name,
        c.innings_remaining(),
        format_era(c.era(), c.innings_pitched)
    )
}

/// Display lines for one team and role, ordered by last name.
///
/// Players missing either name are left out.
pub fn list_players(db: &StatsDatabase, team_id: TeamId, role: Role) -> Result<Vec<String>> {
    let lines: Vec<String> = match role {
        Role::Hitter => db
            .list_batters(team_id)?
            .iter()
            .filter(|r| !r.first_name.is_empty() && !r.last_name.is_empty())
            .map(batter_line)
            .collect(),
        Role::Pitcher => db
            .list_pitchers(team_id)?
            .iter()
            .filter(|r| !r.first_name.is_empty() && !r.last_name.is_empty())
            .map(pitcher_line)
            .collect(),
    };
    Ok(lines)
}

/// Split a listing line into the first-name initial and last name
pub fn parse_entry(entry: &str) -> Result<(char, String)> {
    let mut tokens = entry.split_whitespace();
    let malformed = || StatsError::MalformedEntry {
        entry: entry.to_string(),
    };

    let initial = tokens
        .next()
        .and_then(|first| first.chars().next())
        .ok_or_else(malformed)?;
    let last_name = tokens.next().ok_or_else(malformed)?;
    Ok((initial, last_name.to_string()))
}

/// Re-query a player picked from a listing, recovering only the quota
pub fn select_entry(
    db: &StatsDatabase,
    team_id: TeamId,
    role: Role,
    entry: &str,
) -> Result<QuotaSelection> {
    let (initial, last_name) = parse_entry(entry)?;
    db.select_quota(team_id, role, initial, &last_name)?
        .ok_or_else(|| StatsError::PlayerNotFound {
            first_name: format!("{}.", initial),
            last_name,
        })
}
