//! Player role selection.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which record type a command operates on.
///
/// # Examples
///
/// ```rust
/// use stratstats::Role;
///
/// let role: Role = "pitcher".parse().unwrap();
/// assert_eq!(role, Role::Pitcher);
/// assert_eq!(Role::Hitter.to_string(), "Hitter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Hitter,
    Pitcher,
}

impl Role {
    /// Table holding records for this role.
    pub fn table(&self) -> &'static str {
        match self {
            Role::Hitter => "hitters",
            Role::Pitcher => "pitchers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Hitter => "Hitter",
            Role::Pitcher => "Pitcher",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hitter" | "hitters" | "batter" | "batters" | "h" | "b" => Ok(Role::Hitter),
            "pitcher" | "pitchers" | "p" => Ok(Role::Pitcher),
            _ => Err(StatsError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_aliases() {
        assert_eq!("Hitter".parse::<Role>().unwrap(), Role::Hitter);
        assert_eq!("batter".parse::<Role>().unwrap(), Role::Hitter);
        assert_eq!(" P ".parse::<Role>().unwrap(), Role::Pitcher);
    }

    #[test]
    fn test_role_from_str_invalid() {
        match "catcher".parse::<Role>() {
            Err(StatsError::InvalidRole { role }) => assert_eq!(role, "catcher"),
            other => panic!("Expected InvalidRole, got {:?}", other),
        }
    }

    #[test]
    fn test_role_table() {
        assert_eq!(Role::Hitter.table(), "hitters");
        assert_eq!(Role::Pitcher.table(), "pitchers");
    }
}
