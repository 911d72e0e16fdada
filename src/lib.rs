//! Stat tracker for tabletop baseball teams.
//!
//! Keeps per-team batting and pitching counters in a local SQLite file and
//! derives the usual rates from them: batting average, slugging, ERA and the
//! remaining at-bat / innings quota for each player.
//!
//! ## Features
//!
//! - **Teams**: create, list and delete (deleting a team removes its players)
//! - **Record editor**: save a player's counters, refusing updates that would
//!   blank a stored value
//! - **Listings**: one line per player with remaining quota and current rate
//! - **Reports**: fixed-width box score with team totals, as text or JSON
//! - **Maintenance**: SQL backup/restore, batch import and full reset
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stratstats::{editor::save_batter, storage::{BatterCounters, StatsDatabase}};
//!
//! # fn example() -> stratstats::Result<()> {
//! let mut db = StatsDatabase::new_in_memory()?;
//! let team = db.create_team("Sluggers")?;
//! let counters = BatterCounters { at_bats: 40, hits: 12, ..Default::default() };
//! let outcome = save_batter(&mut db, team.id, "Ann", "Able", counters)?;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export STRATSTATS_DB=$HOME/baseball/stratstats.db
//! ```

pub mod cli;
pub mod commands;
pub mod editor;
pub mod error;
pub mod listing;
pub mod report;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Role, TeamId};
pub use error::{Result, StatsError};

pub const DB_PATH_ENV_VAR: &str = "STRATSTATS_DB";
