//! Error types for the stratstats tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No team selected. Operation aborted.")]
    NoTeamSelected,

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("A team named '{name}' already exists")]
    DuplicateTeam { name: String },

    #[error("Player not found: {first_name} {last_name}")]
    PlayerNotFound {
        first_name: String,
        last_name: String,
    },

    #[error("Invalid role: {role} (expected hitter or pitcher)")]
    InvalidRole { role: String },

    #[error("Cannot select player from entry: {entry:?}")]
    MalformedEntry { entry: String },

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Refusing to restore into existing database: {path}")]
    StoreNotEmpty { path: String },
}
