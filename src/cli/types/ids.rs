//! ID types for stored teams.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for team row IDs.
///
/// Keeps team IDs from being mixed up with counters or other row IDs when
/// they are passed between the storage and reporting layers.
///
/// # Examples
///
/// ```rust
/// use stratstats::TeamId;
///
/// let team_id = TeamId::new(3);
/// assert_eq!(team_id.as_i64(), 3);
/// assert_eq!(team_id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Create a new TeamId from a SQLite rowid.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying rowid.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
