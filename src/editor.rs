//! Record editor: numeric coercion and the save (upsert) policy.
//!
//! Saving a player replaces the stored counters wholesale. Two things keep a
//! careless submission from clobbering a record:
//!
//! - if nothing differs, no write happens;
//! - if any submitted field is zero where the stored value is not, the whole
//!   update is rejected. Blank and malformed inputs coerce to zero, so a zero
//!   over a stored value is treated as an accidental blank.

use crate::cli::types::TeamId;
use crate::error::Result;
use crate::storage::{
    BatterCounters, BatterRecord, PitcherCounters, PitcherRecord, PitcherValue, StatsDatabase,
};
use serde::Serialize;
use tracing::{debug, info};

/// Parse an integer field, treating anything unparseable as zero.
pub fn coerce_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse a fractional field, treating anything unparseable, negative or
/// non-finite as zero.
pub fn coerce_innings(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite() && *x >= 0.0)
        .unwrap_or(0.0)
}

/// What a save did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
    /// A zero was submitted over a stored non-zero value; nothing written.
    RejectedBlankField { field: &'static str },
}

impl UpsertOutcome {
    /// Status line shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            UpsertOutcome::Inserted => "Player data added successfully.",
            UpsertOutcome::Updated => "Player data updated successfully.",
            UpsertOutcome::Unchanged => "No changes to save.",
            UpsertOutcome::RejectedBlankField { .. } => "No update made due to null input values.",
        }
    }

    pub fn wrote(&self) -> bool {
        matches!(self, UpsertOutcome::Inserted | UpsertOutcome::Updated)
    }
}

/// First column whose submitted value is zero over a stored non-zero one
fn blank_over_stored<V>(
    columns: &[&'static str],
    stored: &[V],
    submitted: &[V],
    is_zero: impl Fn(&V) -> bool,
) -> Option<&'static str> {
    columns
        .iter()
        .zip(stored.iter().zip(submitted))
        .find(|(_, (old, new))| is_zero(*new) && !is_zero(*old))
        .map(|(column, _)| *column)
}

/// Save a batter for `team_id`, following the replace-with-guard policy
pub fn save_batter(
    db: &mut StatsDatabase,
    team_id: TeamId,
    first_name: &str,
    last_name: &str,
    counters: BatterCounters,
) -> Result<UpsertOutcome> {
    let record = BatterRecord {
        team_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        counters,
    };

    let Some(existing) = db.get_batter(team_id, first_name, last_name)? else {
        db.insert_batter(&record)?;
        info!("Added hitter {} {}", first_name, last_name);
        return Ok(UpsertOutcome::Inserted);
    };

    let stored = existing.counters.values();
    let submitted = counters.values();
    if let Some(field) =
        blank_over_stored(&BatterCounters::COLUMNS, &stored, &submitted, |v| *v == 0)
    {
        debug!(
            "Rejected update for {} {}: {} would be blanked",
            first_name, last_name, field
        );
        return Ok(UpsertOutcome::RejectedBlankField { field });
    }

    if stored == submitted {
        return Ok(UpsertOutcome::Unchanged);
    }

    db.update_batter(&record)?;
    info!("Updated hitter {} {}", first_name, last_name);
    Ok(UpsertOutcome::Updated)
}

/// Save a pitcher for `team_id`, following the replace-with-guard policy
pub fn save_pitcher(
    db: &mut StatsDatabase,
    team_id: TeamId,
    first_name: &str,
    last_name: &str,
    counters: PitcherCounters,
) -> Result<UpsertOutcome> {
    let record = PitcherRecord {
        team_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        counters,
    };

    let Some(existing) = db.get_pitcher(team_id, first_name, last_name)? else {
        db.insert_pitcher(&record)?;
        info!("Added pitcher {} {}", first_name, last_name);
        return Ok(UpsertOutcome::Inserted);
    };

    let stored = existing.counters.values();
    let submitted = counters.values();
    if let Some(field) = blank_over_stored(
        &PitcherCounters::COLUMNS,
        &stored,
        &submitted,
        PitcherValue::is_zero,
    ) {
        debug!(
            "Rejected update for {} {}: {} would be blanked",
            first_name, last_name, field
        );
        return Ok(UpsertOutcome::RejectedBlankField { field });
    }

    if stored == submitted {
        return Ok(UpsertOutcome::Unchanged);
    }

    db.update_pitcher(&record)?;
    info!("Updated pitcher {} {}", first_name, last_name);
    Ok(UpsertOutcome::Updated)
}
