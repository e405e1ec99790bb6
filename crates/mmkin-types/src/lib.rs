//! Core types for Michaelis-Menten kinetics analysis

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Enzyme concentration used for the pepsin exercise (mM)
pub const DEFAULT_ENZYME_CONCENTRATION_MM: f64 = 0.028;

/// Header lines skipped before the data rows of a rate table
pub const DEFAULT_HEADER_LINES: usize = 3;

/// Number of points sampled along the fitted line
pub const DEFAULT_CURVE_POINTS: usize = 100;
