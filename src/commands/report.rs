//! Team report handler

use super::{resolve_team, CommandContext};
use crate::{report::TeamReport, Result};
use std::path::Path;
use tracing::info;

/// Print a team's box score, or write it to `output`.
///
/// The exported file holds exactly the text that would have been printed.
pub fn handle_report(
    ctx: &mut CommandContext,
    team: Option<&str>,
    output: Option<&Path>,
    as_json: bool,
) -> Result<()> {
    let Some(db) = ctx.store() else {
        return Ok(());
    };

    let team = resolve_team(db, team)?;
    let report = TeamReport::load(db, team)?;
    let text = if as_json {
        let mut json = serde_json::to_string_pretty(&report.summary())?;
        json.push('\n');
        json
    } else {
        report.to_text()
    };

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!("Report for {} written to {}", report.team.name, path.display());
            println!("Report exported to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
