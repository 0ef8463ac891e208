//! Tabular data handling
//!
//! Structure:
//! - `loader.rs`: CSV ingestion and dtype normalization
//! - `transform.rs`: derived columns, wide-to-long reshape, fuel filter
//! - `change.rs`: decade-over-decade change statistics

pub mod change;
pub mod loader;
pub mod transform;

pub use change::{decade_changes, ChangeRecord, DECADE_GRID};
pub use loader::load_wide;
pub use transform::{filter_fuels, melt, observations, with_other_renewables, Observation};

/// Fuel categories in fixed draw order, after the aggregate/source-only
/// labels have been filtered out.
pub const FUEL_ORDER: [&str; 7] = [
    "Coal",
    "Natural Gas",
    "Petroleum",
    "Nuclear",
    "Hydropower",
    "Wood/biomass",
    "Other Renewables",
];

/// Value columns reshaped wide-to-long, in melt order.
pub const MELT_COLUMNS: [&str; 11] = [
    "Coal",
    "Natural Gas",
    "Petroleum",
    "Nuclear",
    "Hydropower",
    "Wood/biomass",
    "Solar",
    "Wind",
    "Other Renewables",
    "Total Fossil",
    "Total Renewable Energy",
];

/// Fuels dropped after the reshape. Solar and Wind only contribute to the
/// derived Other Renewables series; the two totals overlap everything else.
pub const EXCLUDED_FUELS: [&str; 4] = ["Total Fossil", "Total Renewable Energy", "Solar", "Wind"];
