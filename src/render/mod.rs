//! PNG chart rendering
//!
//! Structure:
//! - `palette.rs`: fixed fuel color registry (embedded JSON)
//! - `style.rs`: static figure styling tables (sizes, fonts, clips)
//! - `trend.rs`: long-run multi-series line chart
//! - `change.rs`: grouped bar charts for decade changes

pub mod change;
pub mod palette;
pub mod style;
pub mod trend;

use crate::error::Error;

/// Map a backend/drawing failure onto the pipeline's Render error.
pub(crate) fn render_err(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}
