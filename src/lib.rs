//! Energy Transitions Library
//!
//! Core modules for the energy-transitions charting pipeline:
//! - `config`: run configuration (input file, output directory, author tag)
//! - `data`: CSV loading, wide-to-long reshaping, decade change statistics
//! - `render`: PNG chart rendering (trend lines, change bars) and palette
//! - `pipeline`: the sequential load → transform → render orchestration

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod render;

pub use error::{Error, Result};
