//! Energy Transitions - Main entry point
//!
//! Loads the historical US primary-energy-consumption CSV, reshapes it,
//! and writes three PNG charts: the long-run consumption trend and two
//! decade-change bar charts (absolute and percent).
//!
//! Module organization:
//! - `data`: loading, reshaping, change statistics
//! - `render`: palette, styling, chart rendering
//! - `config`: run configuration
//! - `pipeline`: the sequential orchestration

use anyhow::Context;
use energy_transitions::config::RunConfig;
use energy_transitions::pipeline;

fn main() {
    println!("Energy Transitions v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args);

    println!("  Data file: {}", config.data_file.display());
    println!("  Output directory: {}", config.output_dir.display());
    println!("  Author tag: {}\n", config.author);

    match run(&config) {
        Ok(()) => println!("\n✓ All figures written"),
        Err(e) => {
            eprintln!("\n✗ Run failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    pipeline::run(config)
        .with_context(|| format!("while processing {}", config.data_file.display()))?;
    Ok(())
}

/// Parse command-line arguments onto a RunConfig
///
/// Flags: `--data <csv>`, `--out <dir>`, `--author <tag>`; anything
/// unrecognized is ignored and the defaults apply.
fn parse_args(args: &[String]) -> RunConfig {
    let mut config = RunConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" if i + 1 < args.len() => {
                config.data_file = args[i + 1].clone().into();
                i += 2;
            }
            "--out" if i + 1 < args.len() => {
                config.output_dir = args[i + 1].clone().into();
                i += 2;
            }
            "--author" if i + 1 < args.len() => {
                config.author = args[i + 1].clone();
                i += 2;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => i += 1,
        }
    }

    config
}

fn print_usage() {
    println!("Usage: energy-transitions [--data <csv>] [--out <dir>] [--author <tag>]");
    println!();
    println!("  --data    input CSV file (default: {})", energy_transitions::config::DEFAULT_DATA_FILE);
    println!("  --out     output directory for the three PNG files (default: .)");
    println!("  --author  author tag in output filenames (default: {})", energy_transitions::config::DEFAULT_AUTHOR);
}
