//! Team box-score report.
//!
//! Renders two fixed-width tables, batters then pitchers. Each table has a
//! title, a column header, a rule, one row per named player, a blank line and
//! a totals row. Team rates in the totals row come from the summed counters,
//! never from averaging the per-player rates.

use crate::error::Result;
use crate::stats::{format_era, format_rate};
use crate::storage::{
    BatterCounters, BatterRecord, PitcherCounters, PitcherRecord, StatsDatabase, Team,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Column {
    title: &'static str,
    width: usize,
    align: Align,
}

const fn left(title: &'static str, width: usize) -> Column {
    Column {
        title,
        width,
        align: Align::Left,
    }
}

const fn right(title: &'static str, width: usize) -> Column {
    Column {
        title,
        width,
        align: Align::Right,
    }
}

const BATTER_COLUMNS: [Column; 19] = [
    left("Name", 17),
    right("G", 3),
    right("AB", 5),
    right("ABA", 5),
    right("ABR", 5),
    right("AVG", 6),
    right("SLG", 6),
    right("H", 5),
    right("R", 5),
    right("2B", 4),
    right("3B", 4),
    right("HR", 4),
    right("RBI", 5),
    right("K", 5),
    right("BB", 5),
    right("SB", 4),
    right("CS", 4),
    right("GIDP", 5),
    right("ERR", 4),
];

const PITCHER_COLUMNS: [Column; 18] = [
    left("Name", 17),
    right("G", 3),
    right("GS", 4),
    right("IP", 7),
    right("IPA", 7),
    right("IPR", 7),
    right("W", 4),
    right("L", 4),
    right("SV", 4),
    right("HLD", 4),
    right("H", 5),
    right("ER", 5),
    right("HR", 4),
    right("ERA", 6),
    right("K", 5),
    right("BB", 5),
    right("WP", 4),
    right("ERR", 4),
];

const TOTALS_LABEL: &str = "Team Totals";

/// One line of cells laid out against `columns`, without trailing spaces
fn render_line(columns: &[Column], cells: &[String]) -> String {
    let mut line = String::new();
    for (i, (column, cell)) in columns.iter().zip(cells).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        match column.align {
            Align::Left => line.push_str(&format!("{:<width$}", cell, width = column.width)),
            Align::Right => line.push_str(&format!("{:>width$}", cell, width = column.width)),
        }
    }
    line.truncate(line.trim_end().len());
    line
}

fn render_table(title: &str, columns: &[Column], rows: &[Vec<String>], totals: &[String]) -> String {
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
    let header = render_line(columns, &titles);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');
    for row in rows {
        out.push_str(&render_line(columns, row));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&render_line(columns, totals));
    out.push('\n');
    out
}

/// "F. Last" as printed in the name column
fn short_name(first_name: &str, last_name: &str) -> String {
    let initial = first_name.chars().next().unwrap_or(' ');
    format!("{}. {}", initial, last_name)
}

fn has_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

fn batter_cells(label: String, c: &BatterCounters) -> Vec<String> {
    vec![
        label,
        c.games.to_string(),
        c.at_bats.to_string(),
        c.at_bats_available.to_string(),
        c.at_bats_remaining().to_string(),
        format_rate(c.average(), c.at_bats),
        format_rate(c.slugging(), c.at_bats),
        c.hits.to_string(),
        c.runs.to_string(),
        c.doubles.to_string(),
        c.triples.to_string(),
        c.home_runs.to_string(),
        c.rbi.to_string(),
        c.strikeouts.to_string(),
        c.walks.to_string(),
        c.stolen_bases.to_string(),
        c.caught_stealing.to_string(),
        c.gidp.to_string(),
        c.errors.to_string(),
    ]
}

fn pitcher_cells(label: String, c: &PitcherCounters) -> Vec<String> {
    vec![
        label,
        c.games.to_string(),
        c.games_started.to_string(),
        format!("{:.1}", c.innings_pitched),
        format!("{:.1}", c.innings_available),
        format!("{:.1}", c.innings_remaining()),
        c.wins.to_string(),
        c.losses.to_string(),
        c.saves.to_string(),
        c.holds.to_string(),
        c.hits_allowed.to_string(),
        c.earned_runs.to_string(),
        c.home_runs_allowed.to_string(),
        format_era(c.era(), c.innings_pitched),
        c.strikeouts.to_string(),
        c.walks.to_string(),
        c.wild_pitches.to_string(),
        c.errors.to_string(),
    ]
}

/// Everything needed to print one team's box score
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub team: Team,
    pub batters: Vec<BatterRecord>,
    pub pitchers: Vec<PitcherRecord>,
}

/// Per-player line in the JSON form of a report
#[derive(Debug, Clone, Serialize)]
pub struct BatterLine {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub counters: BatterCounters,
    pub at_bats_remaining: i64,
    pub avg: String,
    pub slg: String,
}

/// Per-player line in the JSON form of a report
#[derive(Debug, Clone, Serialize)]
pub struct PitcherLine {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub counters: PitcherCounters,
    pub innings_remaining: f64,
    pub era: String,
}

/// JSON form of a report: per-player lines plus totals
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub team: String,
    pub batters: Vec<BatterLine>,
    pub batter_totals: BatterLine,
    pub pitchers: Vec<PitcherLine>,
    pub pitcher_totals: PitcherLine,
}

impl BatterLine {
    fn new(first_name: &str, last_name: &str, counters: BatterCounters) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            at_bats_remaining: counters.at_bats_remaining(),
            avg: format_rate(counters.average(), counters.at_bats),
            slg: format_rate(counters.slugging(), counters.at_bats),
            counters,
        }
    }
}

impl PitcherLine {
    fn new(first_name: &str, last_name: &str, counters: PitcherCounters) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            innings_remaining: counters.innings_remaining(),
            era: format_era(counters.era(), counters.innings_pitched),
            counters,
        }
    }
}

impl TeamReport {
    /// Load a team's players, ordered by last name
    pub fn load(db: &StatsDatabase, team: Team) -> Result<Self> {
        let batters = db.list_batters(team.id)?;
        let pitchers = db.list_pitchers(team.id)?;
        Ok(Self {
            team,
            batters,
            pitchers,
        })
    }

    /// Field-wise sum of every batter, named or not
    pub fn batter_totals(&self) -> BatterCounters {
        BatterCounters::sum(self.batters.iter().map(|b| &b.counters))
    }

    /// Field-wise sum of every pitcher, named or not
    pub fn pitcher_totals(&self) -> PitcherCounters {
        PitcherCounters::sum(self.pitchers.iter().map(|p| &p.counters))
    }

    pub fn batters_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .batters
            .iter()
            .filter(|b| has_name(&b.first_name, &b.last_name))
            .map(|b| batter_cells(short_name(&b.first_name, &b.last_name), &b.counters))
            .collect();
        let totals = batter_cells(TOTALS_LABEL.to_string(), &self.batter_totals());
        render_table("Batters", &BATTER_COLUMNS, &rows, &totals)
    }

    pub fn pitchers_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .pitchers
            .iter()
            .filter(|p| has_name(&p.first_name, &p.last_name))
            .map(|p| pitcher_cells(short_name(&p.first_name, &p.last_name), &p.counters))
            .collect();
        let totals = pitcher_cells(TOTALS_LABEL.to_string(), &self.pitcher_totals());
        render_table("Pitchers", &PITCHER_COLUMNS, &rows, &totals)
    }

    /// Both tables, as displayed, printed and exported
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.batters_table(), self.pitchers_table())
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            team: self.team.name.clone(),
            batters: self
                .batters
                .iter()
                .map(|b| BatterLine::new(&b.first_name, &b.last_name, b.counters))
                .collect(),
            batter_totals: BatterLine::new(TOTALS_LABEL, "", self.batter_totals()),
            pitchers: self
                .pitchers
                .iter()
                .map(|p| PitcherLine::new(&p.first_name, &p.last_name, p.counters))
                .collect(),
            pitcher_totals: PitcherLine::new(TOTALS_LABEL, "", self.pitcher_totals()),
        }
    }
}
