//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use stratstats::{
    cli::{Commands, SaveCmd, StratStats, TeamCmd},
    commands::{
        entry::{handle_list, handle_save_hitter, handle_save_pitcher, handle_select, handle_show},
        maintenance::{handle_backup, handle_import, handle_reset, handle_restore},
        report::handle_report,
        team::{handle_team_create, handle_team_delete, handle_team_list},
        CommandContext,
    },
    storage::StatsDatabase,
};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = StratStats::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if app.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    let db_path = StatsDatabase::database_path(app.db.as_deref())
        .context("Could not determine where to keep the database")?;
    debug!("Using database {}", db_path.display());

    // Restore builds a fresh file, so it runs before anything opens one
    if let Commands::Restore { file, into } = &app.command {
        let target = into.as_deref().unwrap_or(&db_path);
        handle_restore(file, target)
            .with_context(|| format!("Restore from {} failed", file.display()))?;
        return Ok(());
    }

    let mut ctx = CommandContext::open(&db_path);

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Create { name } => handle_team_create(&mut ctx, &name)?,
            TeamCmd::Delete { name, yes } => handle_team_delete(&mut ctx, &name, yes)?,
            TeamCmd::List => handle_team_list(&mut ctx)?,
        },

        Commands::Save { cmd } => match cmd {
            SaveCmd::Hitter(fields) => handle_save_hitter(&mut ctx, &fields)?,
            SaveCmd::Pitcher(fields) => handle_save_pitcher(&mut ctx, &fields)?,
        },

        Commands::List { team, role, json } => {
            handle_list(&mut ctx, team.as_deref(), role, json)?
        }

        Commands::Select { team, role, entry } => {
            handle_select(&mut ctx, team.as_deref(), role, &entry)?
        }

        Commands::Show {
            team,
            role,
            first,
            last,
            json,
        } => handle_show(&mut ctx, team.as_deref(), role, &first, &last, json)?,

        Commands::Report { team, output, json } => {
            handle_report(&mut ctx, team.as_deref(), output.as_deref(), json)?
        }

        Commands::Import { team, role, file } => handle_import(&mut ctx, team.as_deref(), role, &file)
            .with_context(|| format!("Import from {} failed", file.display()))?,

        Commands::Backup { output } => handle_backup(&mut ctx, output.as_deref())?,

        Commands::ResetDb { yes } => handle_reset(&mut ctx, yes)?,

        Commands::Restore { .. } => {}
    }

    Ok(())
}
