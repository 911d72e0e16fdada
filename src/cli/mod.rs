//! CLI argument definitions and parsing.

pub mod types;

use crate::editor::{coerce_count, coerce_innings};
use crate::storage::{BatterCounters, PitcherCounters};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Role;

/// Team and player name shared by the save commands
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Team the player belongs to.
    #[clap(long, short)]
    pub team: Option<String>,

    /// Player first name.
    #[clap(long)]
    pub first: String,

    /// Player last name.
    #[clap(long)]
    pub last: String,
}

/// Batter form fields. Values are taken as typed; anything that is not a
/// whole number is saved as 0.
#[derive(Debug, Args)]
pub struct HitterFields {
    #[clap(flatten)]
    pub player: PlayerArgs,

    /// Games played.
    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub games: String,

    /// At-bats.
    #[clap(long = "ab", default_value = "", allow_hyphen_values = true)]
    pub at_bats: String,

    /// Season at-bat quota.
    #[clap(long = "aba", default_value = "", allow_hyphen_values = true)]
    pub at_bats_available: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub hits: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub runs: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub doubles: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub triples: String,

    /// Home runs.
    #[clap(long = "hr", default_value = "", allow_hyphen_values = true)]
    pub home_runs: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub rbi: String,

    /// Strikeouts.
    #[clap(long = "k", default_value = "", allow_hyphen_values = true)]
    pub strikeouts: String,

    /// Walks.
    #[clap(long = "bb", default_value = "", allow_hyphen_values = true)]
    pub walks: String,

    /// Stolen bases.
    #[clap(long = "sb", default_value = "", allow_hyphen_values = true)]
    pub stolen_bases: String,

    /// Caught stealing.
    #[clap(long = "cs", default_value = "", allow_hyphen_values = true)]
    pub caught_stealing: String,

    /// Grounded into double play.
    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub gidp: String,

    /// Fielding errors.
    #[clap(long = "err", default_value = "", allow_hyphen_values = true)]
    pub errors: String,
}

impl HitterFields {
    pub fn counters(&self) -> BatterCounters {
        BatterCounters {
            games: coerce_count(&self.games),
            at_bats: coerce_count(&self.at_bats),
            at_bats_available: coerce_count(&self.at_bats_available),
            hits: coerce_count(&self.hits),
            runs: coerce_count(&self.runs),
            doubles: coerce_count(&self.doubles),
            triples: coerce_count(&self.triples),
            home_runs: coerce_count(&self.home_runs),
            rbi: coerce_count(&self.rbi),
            strikeouts: coerce_count(&self.strikeouts),
            walks: coerce_count(&self.walks),
            stolen_bases: coerce_count(&self.stolen_bases),
            caught_stealing: coerce_count(&self.caught_stealing),
            gidp: coerce_count(&self.gidp),
            errors: coerce_count(&self.errors),
        }
    }
}

/// Pitcher form fields. Innings accept decimals; other fields are whole
/// numbers. Anything unparseable is saved as 0.
#[derive(Debug, Args)]
pub struct PitcherFields {
    #[clap(flatten)]
    pub player: PlayerArgs,

    /// Games pitched.
    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub games: String,

    /// Games started.
    #[clap(long = "gs", default_value = "", allow_hyphen_values = true)]
    pub games_started: String,

    /// Innings pitched.
    #[clap(long = "ip", default_value = "", allow_hyphen_values = true)]
    pub innings_pitched: String,

    /// Season innings quota.
    #[clap(long = "ipa", default_value = "", allow_hyphen_values = true)]
    pub innings_available: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub wins: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub losses: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub saves: String,

    #[clap(long, default_value = "", allow_hyphen_values = true)]
    pub holds: String,

    /// Hits allowed.
    #[clap(long = "hits", default_value = "", allow_hyphen_values = true)]
    pub hits_allowed: String,

    /// Earned runs.
    #[clap(long = "er", default_value = "", allow_hyphen_values = true)]
    pub earned_runs: String,

    /// Home runs allowed.
    #[clap(long = "hr", default_value = "", allow_hyphen_values = true)]
    pub home_runs_allowed: String,

    /// Strikeouts.
    #[clap(long = "k", default_value = "", allow_hyphen_values = true)]
    pub strikeouts: String,

    /// Walks.
    #[clap(long = "bb", default_value = "", allow_hyphen_values = true)]
    pub walks: String,

    /// Wild pitches.
    #[clap(long = "wp", default_value = "", allow_hyphen_values = true)]
    pub wild_pitches: String,

    /// Fielding errors.
    #[clap(long = "err", default_value = "", allow_hyphen_values = true)]
    pub errors: String,
}

impl PitcherFields {
    pub fn counters(&self) -> PitcherCounters {
        PitcherCounters {
            games: coerce_count(&self.games),
            games_started: coerce_count(&self.games_started),
            innings_pitched: coerce_innings(&self.innings_pitched),
            innings_available: coerce_innings(&self.innings_available),
            wins: coerce_count(&self.wins),
            losses: coerce_count(&self.losses),
            saves: coerce_count(&self.saves),
            holds: coerce_count(&self.holds),
            hits_allowed: coerce_count(&self.hits_allowed),
            earned_runs: coerce_count(&self.earned_runs),
            home_runs_allowed: coerce_count(&self.home_runs_allowed),
            strikeouts: coerce_count(&self.strikeouts),
            walks: coerce_count(&self.walks),
            wild_pitches: coerce_count(&self.wild_pitches),
            errors: coerce_count(&self.errors),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Create a new team.
    Create { name: String },

    /// Delete a team and every player stat filed under it.
    Delete {
        name: String,

        /// Confirm the deletion.
        #[clap(long)]
        yes: bool,
    },

    /// List all teams.
    List,
}

#[derive(Debug, Subcommand)]
pub enum SaveCmd {
    /// Add or update a hitter.
    Hitter(HitterFields),

    /// Add or update a pitcher.
    Pitcher(PitcherFields),
}

#[derive(Debug, Parser)]
#[clap(name = "stratstats", about = "Stat tracker for tabletop baseball teams")]
pub struct StratStats {
    /// Database file (or set `STRATSTATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug detail to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, delete and list teams.
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Save a player's stats (replaces stored values).
    ///
    /// A field submitted as 0 over a stored non-zero value rejects the whole
    /// update.
    Save {
        #[clap(subcommand)]
        cmd: SaveCmd,
    },

    /// List a team's hitters or pitchers with remaining quota and rate.
    List {
        #[clap(long, short)]
        team: Option<String>,

        /// hitter or pitcher.
        #[clap(long, short, default_value_t = Role::Hitter)]
        role: Role,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Pick a player from a listing line and show their quota.
    Select {
        #[clap(long, short)]
        team: Option<String>,

        #[clap(long, short, default_value_t = Role::Hitter)]
        role: Role,

        /// A line as printed by `list`, e.g. "Hank Aaron  ABR: 150  AVG: .275".
        entry: String,
    },

    /// Show every stored field for one player.
    Show {
        #[clap(long, short)]
        team: Option<String>,

        #[clap(long, short, default_value_t = Role::Hitter)]
        role: Role,

        #[clap(long)]
        first: String,

        #[clap(long)]
        last: String,

        /// Output results as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Print a team's box score, or export it to a file.
    Report {
        #[clap(long, short)]
        team: Option<String>,

        /// Write the report text to this file instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output the report as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Add stats from a JSON file onto existing players (accumulates).
    Import {
        #[clap(long, short)]
        team: Option<String>,

        #[clap(long, short, default_value_t = Role::Hitter)]
        role: Role,

        /// JSON array of players with first_name, last_name and counters.
        file: PathBuf,
    },

    /// Dump the whole database as replayable SQL.
    Backup {
        /// Defaults to stratstats_backup_YYYYMMDD.sql in the current directory.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Rebuild a database from a backup file.
    Restore {
        /// Backup file written by `backup`.
        file: PathBuf,

        /// Database to create (defaults to the configured database, which must not exist).
        #[clap(long)]
        into: Option<PathBuf>,
    },

    /// Delete all teams and player stats.
    ResetDb {
        /// Confirm the reset.
        #[clap(long)]
        yes: bool,
    },
}
