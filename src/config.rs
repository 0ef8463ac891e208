//! Run configuration
//!
//! Every path is an explicit parameter passed into the pipeline entry
//! point; nothing reads the working directory implicitly. Chart cosmetics
//! live in `render::style`, not here.

use std::path::PathBuf;

/// Default input CSV, relative to the current directory
pub const DEFAULT_DATA_FILE: &str = "data/Primary Energy Consumption_from 1635.csv";

/// Default author tag embedded in output filenames
pub const DEFAULT_AUTHOR: &str = "KTSanders";

/// Configuration for a single pipeline run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the input CSV file
    pub data_file: PathBuf,

    /// Directory the three PNG files are written into
    pub output_dir: PathBuf,

    /// Author tag appended to each output filename
    pub author: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            output_dir: PathBuf::from("."),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl RunConfig {
    pub fn new(
        data_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        author: impl Into<String>,
    ) -> Self {
        RunConfig {
            data_file: data_file.into(),
            output_dir: output_dir.into(),
            author: author.into(),
        }
    }

    /// Output path for the long-run trend line chart
    pub fn trend_path(&self) -> PathBuf {
        self.figure_path("Figure_Fuel-Consumption-by-Source")
    }

    /// Output path for the absolute-change bar chart
    pub fn absolute_change_path(&self) -> PathBuf {
        self.figure_path("Figure_Absolute-Change-in-Fuel-Consumption")
    }

    /// Output path for the percent-change bar chart
    pub fn percent_change_path(&self) -> PathBuf {
        self.figure_path("Figure_Rate-of-Change-in-Fuel-Consumption")
    }

    fn figure_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", stem, self.author))
    }

    /// Attribution line drawn under each chart
    pub fn attribution(&self) -> String {
        format!("Plot created by {}", self.author)
    }
}

/// Convenience accessor used by tests and the binary
pub fn output_paths(config: &RunConfig) -> [PathBuf; 3] {
    [
        config.trend_path(),
        config.absolute_change_path(),
        config.percent_change_path(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filenames_carry_author_tag() {
        let config = RunConfig::new("in.csv", "/tmp/out", "KTSanders");

        assert_eq!(
            config.trend_path(),
            PathBuf::from("/tmp/out/Figure_Fuel-Consumption-by-Source_KTSanders.png")
        );
        assert_eq!(
            config.absolute_change_path(),
            PathBuf::from("/tmp/out/Figure_Absolute-Change-in-Fuel-Consumption_KTSanders.png")
        );
        assert_eq!(
            config.percent_change_path(),
            PathBuf::from("/tmp/out/Figure_Rate-of-Change-in-Fuel-Consumption_KTSanders.png")
        );
    }

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.author, DEFAULT_AUTHOR);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
