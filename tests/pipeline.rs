//! End-to-end pipeline test over a synthetic CSV
//!
//! Writes a small input file with every required column, runs the full
//! load → transform → render pipeline, and checks both the staged row
//! counts and the three output files.

use std::io::Write;

use energy_transitions::config::RunConfig;
use energy_transitions::data;
use energy_transitions::pipeline;

/// Two pre-header lines, then header, then three decade-grid years.
/// Coal and Wood/biomass carry the signal; everything else is zero or
/// blank (blanks must fill to zero).
const SYNTHETIC_CSV: &str = "\
Synthetic Primary Energy Consumption\n\
Quadrillion Btu\n\
,Coal,Natural Gas,Petroleum,Nuclear,Hydropower,Wood/biomass,Solar,Wind,Total Fossil,Total Renewable Energy\n\
1845,0.5,,0,0,0,2.0,,,0.5,2.0\n\
1855,1.2,0,0,0,0,2.5,,,1.2,2.5\n\
1865,2.0,0,0,0,0,2.3,,,2.0,2.3\n";

fn write_synthetic_csv(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("synthetic.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SYNTHETIC_CSV.as_bytes()).unwrap();
    path
}

#[test]
fn test_full_run_writes_three_figures() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = write_synthetic_csv(dir.path());
    let out_dir = dir.path().join("figures");

    let config = RunConfig::new(&data_file, &out_dir, "Test");
    pipeline::run(&config).unwrap();

    for path in [
        config.trend_path(),
        config.absolute_change_path(),
        config.percent_change_path(),
    ] {
        assert!(path.exists(), "missing output {}", path.display());
        let size = std::fs::metadata(&path).unwrap().len();
        assert!(size > 0, "empty output {}", path.display());
    }

    let trend_name = config.trend_path();
    assert_eq!(
        trend_name.file_name().and_then(|n| n.to_str()),
        Some("Figure_Fuel-Consumption-by-Source_Test.png")
    );
}

#[test]
fn test_stage_row_counts_match_multipliers() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = write_synthetic_csv(dir.path());

    let wide = data::load_wide(&data_file).unwrap();
    assert_eq!(wide.height(), 3);

    let wide = data::with_other_renewables(wide).unwrap();
    let long = data::melt(&wide).unwrap();
    // 3 years × 11 melted columns
    assert_eq!(long.height(), 33);

    let filtered = data::filter_fuels(&long).unwrap();
    // 3 years × 7 fuel categories
    assert_eq!(filtered.height(), 21);

    let observations = data::observations(&filtered).unwrap();
    assert_eq!(observations.len(), 21);

    // Coal worked example from the synthetic data: 0.5 -> 1.2 -> 2.0
    let changes = data::decade_changes(&observations, &data::DECADE_GRID);
    let coal: Vec<&data::ChangeRecord> =
        changes.iter().filter(|r| r.fuel == "Coal").collect();
    assert_eq!(coal.len(), 2);
    assert_eq!(coal[0].span, "1845-1855");
    assert!((coal[0].absolute - 0.7).abs() < 1e-12);
    assert!((coal[0].percent.unwrap() - 1.4).abs() < 1e-12);
    assert_eq!(coal[1].span, "1855-1865");
    assert!((coal[1].absolute - 0.8).abs() < 1e-12);

    // Zero-valued fuels produce records with undefined percent change
    let nuclear: Vec<&data::ChangeRecord> =
        changes.iter().filter(|r| r.fuel == "Nuclear").collect();
    assert_eq!(nuclear.len(), 2);
    assert!(nuclear.iter().all(|r| r.absolute == 0.0));
    assert!(nuclear.iter().all(|r| r.percent.is_none()));
}

#[test]
fn test_missing_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::new(dir.path().join("absent.csv"), dir.path(), "Test");

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, energy_transitions::Error::FileAccess(_)));
    assert!(!config.trend_path().exists());
}
