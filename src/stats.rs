//! Derived statistics computed from stored counters.
//!
//! Nothing here is persisted. Every rate falls back to zero when its
//! denominator is zero, and the `format_*` helpers render rates the way box
//! scores print them: `.275` rather than `0.275`.

/// Batting average: hits / at-bats.
pub fn batting_average(hits: u32, at_bats: u32) -> f64 {
    if at_bats == 0 {
        return 0.0;
    }
    f64::from(hits) / f64::from(at_bats)
}

/// Slugging percentage: total bases / at-bats.
///
/// Total bases are counted as `H + 2B + 2*3B + 3*HR`, since every extra-base
/// hit is already one base inside `H`.
pub fn slugging(hits: u32, doubles: u32, triples: u32, home_runs: u32, at_bats: u32) -> f64 {
    if at_bats == 0 {
        return 0.0;
    }
    let total_bases = u64::from(hits)
        + u64::from(doubles)
        + 2 * u64::from(triples)
        + 3 * u64::from(home_runs);
    total_bases as f64 / f64::from(at_bats)
}

/// Season at-bats left against the quota. Walks count against it.
pub fn at_bats_remaining(available: u32, at_bats: u32, walks: u32) -> i64 {
    i64::from(available) - (i64::from(at_bats) + i64::from(walks))
}

/// Earned run average over nine innings.
pub fn era(earned_runs: u32, innings_pitched: f64) -> f64 {
    if innings_pitched <= 0.0 {
        return 0.0;
    }
    f64::from(earned_runs) / innings_pitched * 9.0
}

/// Innings left against the quota.
pub fn innings_remaining(available: f64, pitched: f64) -> f64 {
    available - pitched
}

/// Drop a single leading zero in front of the decimal point.
fn strip_leading_zero(formatted: String) -> String {
    match formatted.strip_prefix('0') {
        Some(rest) if rest.starts_with('.') => rest.to_string(),
        _ => formatted,
    }
}

/// Three-decimal rate (AVG, SLG). `.000` when there were no at-bats.
pub fn format_rate(value: f64, at_bats: u32) -> String {
    if at_bats == 0 {
        return ".000".to_string();
    }
    strip_leading_zero(format!("{:.3}", value))
}

/// Two-decimal ERA. `0.00` when no innings were pitched.
pub fn format_era(value: f64, innings_pitched: f64) -> String {
    if innings_pitched <= 0.0 {
        return "0.00".to_string();
    }
    strip_leading_zero(format!("{:.2}", value))
}
