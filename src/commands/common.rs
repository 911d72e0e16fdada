//! Shared state for command handlers.

use crate::storage::StatsDatabase;
use std::path::Path;
use tracing::{error, warn};

/// Context containing the resources every command needs.
///
/// The store is optional: if it cannot be opened at startup the CLI keeps
/// running and each command logs that it has nothing to work on.
pub struct CommandContext {
    db: Option<StatsDatabase>,
}

impl CommandContext {
    /// Open the store at `path`, logging (not returning) any failure
    pub fn open(path: &Path) -> Self {
        match StatsDatabase::open(path) {
            Ok(db) => Self { db: Some(db) },
            Err(e) => {
                error!("Error connecting to database at {}: {}", path.display(), e);
                Self { db: None }
            }
        }
    }

    pub fn from_database(db: StatsDatabase) -> Self {
        Self { db: Some(db) }
    }

    /// A context with no store, as left behind by a failed open
    pub fn disconnected() -> Self {
        Self { db: None }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    /// The store, or `None` after logging that the command is skipped
    pub fn store(&mut self) -> Option<&mut StatsDatabase> {
        if self.db.is_none() {
            warn!("No database connection; nothing to do");
        }
        self.db.as_mut()
    }
}
