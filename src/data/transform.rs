//! Wide-to-long reshape and derived columns
//!
//! The reshape is an explicit column walk: every (Year, Fuel, Value)
//! triple is built in one place, and the fuel filter is an ordinary
//! boolean mask over the long table.

use polars::prelude::*;

use super::{EXCLUDED_FUELS, MELT_COLUMNS};
use crate::error::Result;

/// One long-form row: a single fuel's consumption in a single year,
/// in quadrillion BTU.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub year: i64,
    pub fuel: String,
    pub value: f64,
}

/// Append the derived `Other Renewables` column = Solar + Wind,
/// element-wise over the already zero-filled series.
pub fn with_other_renewables(mut df: DataFrame) -> Result<DataFrame> {
    let solar = df.column("Solar")?.as_materialized_series().clone();
    let wind = df.column("Wind")?.as_materialized_series().clone();

    let mut other = (&solar + &wind)?;
    other.rename("Other Renewables".into());
    df.with_column(other)?;

    Ok(df)
}

/// Reshape the wide table to long form: one row per (Year, Fuel, Value)
/// triple, for the fixed list of value columns in [`MELT_COLUMNS`].
pub fn melt(df: &DataFrame) -> Result<DataFrame> {
    let years = df.column("Year")?.as_materialized_series().i64()?.clone();
    let height = df.height();

    let mut year_out: Vec<i64> = Vec::with_capacity(height * MELT_COLUMNS.len());
    let mut fuel_out: Vec<&str> = Vec::with_capacity(height * MELT_COLUMNS.len());
    let mut value_out: Vec<f64> = Vec::with_capacity(height * MELT_COLUMNS.len());

    for name in MELT_COLUMNS {
        let values = df.column(name)?.as_materialized_series().f64()?.clone();
        for (year, value) in years.into_iter().zip(values.into_iter()) {
            year_out.push(year.unwrap_or(0));
            fuel_out.push(name);
            value_out.push(value.unwrap_or(0.0));
        }
    }

    let long = df!(
        "Year" => year_out,
        "Fuel" => fuel_out,
        "Value" => value_out,
    )?;

    Ok(long)
}

/// Drop the aggregate and source-only fuels from the long table.
///
/// Solar and Wind survive only through the derived Other Renewables
/// series, so the filtered row count is input years × 7.
pub fn filter_fuels(long: &DataFrame) -> Result<DataFrame> {
    let fuel = long.column("Fuel")?.as_materialized_series().str()?.clone();

    let mask: BooleanChunked = fuel
        .into_iter()
        .map(|f| f.map(|name| !EXCLUDED_FUELS.contains(&name)))
        .collect();

    Ok(long.filter(&mask)?)
}

/// Extract typed observations from a long-form table.
pub fn observations(long: &DataFrame) -> Result<Vec<Observation>> {
    let years = long.column("Year")?.as_materialized_series().i64()?.clone();
    let fuels = long.column("Fuel")?.as_materialized_series().str()?.clone();
    let values = long.column("Value")?.as_materialized_series().f64()?.clone();

    let mut out = Vec::with_capacity(long.height());
    for ((year, fuel), value) in years
        .into_iter()
        .zip(fuels.into_iter())
        .zip(values.into_iter())
    {
        if let (Some(year), Some(fuel), Some(value)) = (year, fuel, value) {
            out.push(Observation {
                year,
                fuel: fuel.to_string(),
                value,
            });
        }
    }

    Ok(out)
}
