//! Sequential charting pipeline
//!
//! The whole program is one linear pass:
//! 1. Load the wide CSV table
//! 2. Derive Other Renewables and reshape wide to long
//! 3. Render the consumption trend chart
//! 4. Compute decade-over-decade changes
//! 5. Render the two change bar charts
//!
//! Each renderer only writes its PNG file; a failure aborts the run and
//! leaves any already-written images on disk.

use crate::config::RunConfig;
use crate::data;
use crate::error::Result;
use crate::render;

/// Run the full load → transform → render pipeline.
pub fn run(config: &RunConfig) -> Result<()> {
    println!("[1/5] Loading {}", config.data_file.display());
    let wide = data::load_wide(&config.data_file)?;
    println!("  ✓ {} rows × {} columns", wide.height(), wide.width());

    println!("[2/5] Reshaping wide to long...");
    let wide = data::with_other_renewables(wide)?;
    let long = data::melt(&wide)?;
    let filtered = data::filter_fuels(&long)?;
    let observations = data::observations(&filtered)?;
    println!(
        "  ✓ {} rows melted, {} observations after fuel filter",
        long.height(),
        observations.len()
    );

    std::fs::create_dir_all(&config.output_dir)?;
    let attribution = config.attribution();

    println!("[3/5] Rendering consumption trend...");
    let trend_path = config.trend_path();
    render::trend::render(&observations, &trend_path, &attribution)?;
    println!("  ✓ wrote {}", trend_path.display());

    println!("[4/5] Computing decade-over-decade changes...");
    let changes = data::decade_changes(&observations, &data::DECADE_GRID);
    println!("  ✓ {} change records", changes.len());

    println!("[5/5] Rendering change charts...");
    let absolute_path = config.absolute_change_path();
    render::change::render_absolute(&changes, &absolute_path, &attribution)?;
    println!("  ✓ wrote {}", absolute_path.display());

    let percent_path = config.percent_change_path();
    render::change::render_percent(&changes, &percent_path, &attribution)?;
    println!("  ✓ wrote {}", percent_path.display());

    Ok(())
}
