//! CLI definition using clap

use clap::{Parser, Subcommand};
use mmkin_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mmkin")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Michaelis-Menten kinetics from a Lineweaver-Burk fit")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Total enzyme concentration [E]_0 in mM. Uses config value if not specified.
    #[arg(long, short = 'e', global = true)]
    pub enzyme: Option<f64>,

    /// Header lines to skip in the rate table. Uses config value if not specified.
    #[arg(long, global = true)]
    pub header_lines: Option<usize>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fit a rate table and print v_max, K_M and k_2
    Fit {
        /// Path to rate table ([S] and v columns)
        file: PathBuf,
    },

    /// Print the reciprocal (1/[S], 1/v) coordinates of a rate table
    Transform {
        /// Path to rate table
        file: PathBuf,
    },

    /// Export Lineweaver-Burk plot data as CSV
    Curve {
        /// Path to rate table
        file: PathBuf,

        /// Output CSV file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Points along the fitted line. Uses config value if not specified.
        #[arg(long, short = 'n')]
        points: Option<usize>,

        /// Include the measured points as a "data" series
        #[arg(long)]
        with_data: bool,
    },

    /// Predict rates from the fitted Michaelis-Menten model
    Predict {
        /// Path to rate table
        file: PathBuf,

        /// Substrate concentrations (mM)
        #[arg(required = true)]
        substrate: Vec<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default enzyme concentration (mM)
        #[arg(long)]
        set_enzyme: Option<f64>,

        /// Set default number of header lines
        #[arg(long)]
        set_header_lines: Option<usize>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default number of curve points
        #[arg(long)]
        set_curve_points: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
