//! Decade-over-decade change statistics
//!
//! Change records come from an explicit sort-by-year and pairwise scan
//! within each fuel, which keeps the "no prior value" and "zero prior
//! value" cases visible in one place.

use std::collections::HashMap;

use super::Observation;

/// Sample years used for the change charts: 1845 through 1905, step 10.
pub const DECADE_GRID: [i64; 7] = [1845, 1855, 1865, 1875, 1885, 1895, 1905];

/// Change in one fuel's consumption over one decade span.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub fuel: String,
    /// Decade span label, `"{Year-10}-{Year}"`
    pub span: String,
    /// Value(Year) - Value(prior sampled year), quadrillion BTU
    pub absolute: f64,
    /// absolute / prior value; None when the prior value is exactly zero,
    /// in which case the rate is undefined
    pub percent: Option<f64>,
}

/// Compute per-fuel change records over the sampled year grid.
///
/// Rows are restricted to years in `grid`, sorted by year within each
/// fuel, then diffed against the immediately preceding sampled row. The
/// first sampled year of each fuel has no prior and yields no record.
pub fn decade_changes(observations: &[Observation], grid: &[i64]) -> Vec<ChangeRecord> {
    // Group sampled rows by fuel, preserving first-appearance order so
    // the output ordering is deterministic.
    let mut fuel_order: Vec<&str> = Vec::new();
    let mut by_fuel: HashMap<&str, Vec<(i64, f64)>> = HashMap::new();

    for obs in observations {
        if !grid.contains(&obs.year) {
            continue;
        }
        let entry = by_fuel.entry(obs.fuel.as_str()).or_default();
        if entry.is_empty() {
            fuel_order.push(obs.fuel.as_str());
        }
        entry.push((obs.year, obs.value));
    }

    let mut records = Vec::new();
    for fuel in fuel_order {
        let mut series = by_fuel.remove(fuel).unwrap_or_default();
        series.sort_by_key(|(year, _)| *year);

        for pair in series.windows(2) {
            let (_, prior) = pair[0];
            let (year, value) = pair[1];
            let absolute = value - prior;
            let percent = if prior == 0.0 {
                None
            } else {
                Some(absolute / prior)
            };
            records.push(ChangeRecord {
                fuel: fuel.to_string(),
                span: format!("{}-{}", year - 10, year),
                absolute,
                percent,
            });
        }
    }

    records
}
