//! mmkin - Michaelis-Menten kinetics from Lineweaver-Burk regression
//!
//! A CLI tool that fits 1/v against 1/[S] for a rate table and reports
//! v_max, K_M and k_2.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{fmt, EnvFilter};

const WORKSPACE_CRATES: [&str; 4] = ["mmkin_cli", "mmkin_app", "mmkin_domain", "mmkin_infra"];

/// `RUST_LOG` when set, otherwise warn for the workspace crates.
/// `--verbose` raises the workspace crates to debug on top of either.
fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let from_env = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok());

    let mut filter = from_env.unwrap_or_else(|| {
        let defaults: Vec<String> = WORKSPACE_CRATES
            .iter()
            .map(|krate| format!("{}=warn", krate))
            .collect();
        EnvFilter::new(defaults.join(","))
    });

    if verbose {
        for krate in WORKSPACE_CRATES {
            if let Ok(d) = format!("{}=debug", krate).parse() {
                filter = filter.add_directive(d);
            }
        }
    }
    filter
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();

    fmt()
        .with_env_filter(build_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
