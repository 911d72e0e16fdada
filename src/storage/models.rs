//! Data models for the storage layer

use crate::cli::types::TeamId;
use crate::stats;
use serde::{Deserialize, Serialize};

/// A league team. Owns every batter and pitcher record filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Counting stats for a batter. All fields are replaced on update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatterCounters {
    pub games: u32,
    pub at_bats: u32,
    /// Season at-bat quota.
    pub at_bats_available: u32,
    pub hits: u32,
    pub runs: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub gidp: u32,
    pub errors: u32,
}

impl BatterCounters {
    /// Column names in storage order, paired with the values in `values()`.
    pub const COLUMNS: [&'static str; 15] = [
        "games", "ab", "aba", "hits", "runs", "doubles", "triples", "hr", "rbi", "k", "bb", "sb",
        "cs", "gidp", "err",
    ];

    pub fn values(&self) -> [u32; 15] {
        [
            self.games,
            self.at_bats,
            self.at_bats_available,
            self.hits,
            self.runs,
            self.doubles,
            self.triples,
            self.home_runs,
            self.rbi,
            self.strikeouts,
            self.walks,
            self.stolen_bases,
            self.caught_stealing,
            self.gidp,
            self.errors,
        ]
    }

    pub fn average(&self) -> f64 {
        stats::batting_average(self.hits, self.at_bats)
    }

    pub fn slugging(&self) -> f64 {
        stats::slugging(
            self.hits,
            self.doubles,
            self.triples,
            self.home_runs,
            self.at_bats,
        )
    }

    pub fn at_bats_remaining(&self) -> i64 {
        stats::at_bats_remaining(self.at_bats_available, self.at_bats, self.walks)
    }

    /// Field-wise sum, saturating at `u32::MAX`.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a BatterCounters>) -> BatterCounters {
        items.into_iter().fold(BatterCounters::default(), |acc, c| {
            BatterCounters {
                games: acc.games.saturating_add(c.games),
                at_bats: acc.at_bats.saturating_add(c.at_bats),
                at_bats_available: acc.at_bats_available.saturating_add(c.at_bats_available),
                hits: acc.hits.saturating_add(c.hits),
                runs: acc.runs.saturating_add(c.runs),
                doubles: acc.doubles.saturating_add(c.doubles),
                triples: acc.triples.saturating_add(c.triples),
                home_runs: acc.home_runs.saturating_add(c.home_runs),
                rbi: acc.rbi.saturating_add(c.rbi),
                strikeouts: acc.strikeouts.saturating_add(c.strikeouts),
                walks: acc.walks.saturating_add(c.walks),
                stolen_bases: acc.stolen_bases.saturating_add(c.stolen_bases),
                caught_stealing: acc.caught_stealing.saturating_add(c.caught_stealing),
                gidp: acc.gidp.saturating_add(c.gidp),
                errors: acc.errors.saturating_add(c.errors),
            }
        })
    }
}

/// Counting stats for a pitcher. Innings are stored as plain decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitcherCounters {
    pub games: u32,
    pub games_started: u32,
    pub innings_pitched: f64,
    /// Season innings quota.
    pub innings_available: f64,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub holds: u32,
    pub hits_allowed: u32,
    pub earned_runs: u32,
    pub home_runs_allowed: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub wild_pitches: u32,
    pub errors: u32,
}

/// One pitcher field, typed the way it is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PitcherValue {
    Count(u32),
    Innings(f64),
}

impl PitcherValue {
    pub fn is_zero(&self) -> bool {
        match self {
            PitcherValue::Count(n) => *n == 0,
            PitcherValue::Innings(x) => *x == 0.0,
        }
    }
}

impl PitcherCounters {
    /// Column names in storage order, paired with the values in `values()`.
    pub const COLUMNS: [&'static str; 15] = [
        "games", "st", "ip", "ipa", "wins", "losses", "saves", "holds", "hits", "er", "hr", "k",
        "bb", "wp", "err",
    ];

    pub fn values(&self) -> [PitcherValue; 15] {
        use PitcherValue::{Count, Innings};
        [
            Count(self.games),
            Count(self.games_started),
            Innings(self.innings_pitched),
            Innings(self.innings_available),
            Count(self.wins),
            Count(self.losses),
            Count(self.saves),
            Count(self.holds),
            Count(self.hits_allowed),
            Count(self.earned_runs),
            Count(self.home_runs_allowed),
            Count(self.strikeouts),
            Count(self.walks),
            Count(self.wild_pitches),
            Count(self.errors),
        ]
    }

    pub fn era(&self) -> f64 {
        stats::era(self.earned_runs, self.innings_pitched)
    }

    pub fn innings_remaining(&self) -> f64 {
        stats::innings_remaining(self.innings_available, self.innings_pitched)
    }

    /// Field-wise sum, saturating at `u32::MAX` for counts.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a PitcherCounters>) -> PitcherCounters {
        items.into_iter().fold(PitcherCounters::default(), |acc, c| {
            PitcherCounters {
                games: acc.games.saturating_add(c.games),
                games_started: acc.games_started.saturating_add(c.games_started),
                innings_pitched: acc.innings_pitched + c.innings_pitched,
                innings_available: acc.innings_available + c.innings_available,
                wins: acc.wins.saturating_add(c.wins),
                losses: acc.losses.saturating_add(c.losses),
                saves: acc.saves.saturating_add(c.saves),
                holds: acc.holds.saturating_add(c.holds),
                hits_allowed: acc.hits_allowed.saturating_add(c.hits_allowed),
                earned_runs: acc.earned_runs.saturating_add(c.earned_runs),
                home_runs_allowed: acc.home_runs_allowed.saturating_add(c.home_runs_allowed),
                strikeouts: acc.strikeouts.saturating_add(c.strikeouts),
                walks: acc.walks.saturating_add(c.walks),
                wild_pitches: acc.wild_pitches.saturating_add(c.wild_pitches),
                errors: acc.errors.saturating_add(c.errors),
            }
        })
    }
}

/// A batter as stored: identity plus counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterRecord {
    pub team_id: TeamId,
    pub first_name: String,
    pub last_name: String,
    pub counters: BatterCounters,
}

/// A pitcher as stored: identity plus counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherRecord {
    pub team_id: TeamId,
    pub first_name: String,
    pub last_name: String,
    pub counters: PitcherCounters,
}

/// Entry in a batch import file. Counters are flattened next to the names.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportBatter {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub counters: BatterCounters,
}

/// Entry in a batch import file. Counters are flattened next to the names.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportPitcher {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub counters: PitcherCounters,
}

/// The season quota recovered when an entry is picked from a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quota {
    AtBats(u32),
    Innings(f64),
}

/// Result of selecting a listing entry: names plus the quota field only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotaSelection {
    pub first_name: String,
    pub last_name: String,
    pub quota: Quota,
}
