//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_config, output_predictions, output_report, output_transform};
use mmkin_app::app::{analyze_file, predict_rates, transform_file, AnalysisOptions};
use mmkin_app::config::Config;
use mmkin_app::export::{export_plot_data, export_plot_data_to_file};
use mmkin_types::{OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Fit { file } => {
            let (config, output_format) = effective_config(&cli)?;
            cmd_fit(&config, file, output_format)
        }

        Commands::Transform { file } => {
            let (config, output_format) = effective_config(&cli)?;
            cmd_transform(&config, file, output_format)
        }

        Commands::Curve {
            file,
            output,
            with_data,
            ..
        } => {
            let (config, _) = effective_config(&cli)?;
            cmd_curve(&config, file, output.clone(), *with_data)
        }

        Commands::Predict { file, substrate } => {
            let (config, output_format) = effective_config(&cli)?;
            cmd_predict(&config, file, substrate, output_format)
        }

        // Config management works even when the stored file is out of range
        Commands::Config {
            show,
            set_enzyme,
            set_header_lines,
            set_output,
            set_curve_points,
            reset,
        } => cmd_config(
            *show,
            *set_enzyme,
            *set_header_lines,
            *set_output,
            *set_curve_points,
            *reset,
            cli.format,
        ),
    }
}

/// Stored config with CLI overrides applied, validated
fn effective_config(cli: &Cli) -> Result<(Config, OutputFormat)> {
    let mut config = Config::load()?;

    if let Some(enzyme) = cli.enzyme {
        config.enzyme_concentration = enzyme;
    }
    if let Some(header_lines) = cli.header_lines {
        config.header_lines = header_lines;
    }
    if let Commands::Curve {
        points: Some(points),
        ..
    } = &cli.command
    {
        config.curve_points = *points;
    }
    config.validate()?;

    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?config, %output_format, "effective configuration");
    Ok((config, output_format))
}

fn cmd_fit(config: &Config, file: &Path, output_format: OutputFormat) -> Result<()> {
    let report = analyze_file(file, &AnalysisOptions::from_config(config))?;
    output_report(output_format, &report)
}

fn cmd_transform(config: &Config, file: &Path, output_format: OutputFormat) -> Result<()> {
    let rows = transform_file(file, &AnalysisOptions::from_config(config))?;
    output_transform(output_format, &rows)
}

fn cmd_curve(
    config: &Config,
    file: &Path,
    output: Option<PathBuf>,
    with_data: bool,
) -> Result<()> {
    let curve_points = config.curve_points;
    let report = analyze_file(file, &AnalysisOptions::from_config(config))?;
    match output {
        Some(path) => {
            export_plot_data_to_file(&path, &report, curve_points, with_data)?;
            eprintln!("Plot data written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            export_plot_data(stdout.lock(), &report, curve_points, with_data)?;
        }
    }
    Ok(())
}

fn cmd_predict(
    config: &Config,
    file: &Path,
    substrates: &[f64],
    output_format: OutputFormat,
) -> Result<()> {
    let report = analyze_file(file, &AnalysisOptions::from_config(config))?;
    let predictions = predict_rates(&report, substrates)?;
    output_predictions(output_format, &report, &predictions)
}

fn cmd_config(
    show: bool,
    set_enzyme: Option<f64>,
    set_header_lines: Option<usize>,
    set_output: Option<OutputFormat>,
    set_curve_points: Option<usize>,
    reset: bool,
    format: Option<OutputFormat>,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    // Loaded without range checks; save() validates what is written
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(enzyme) = set_enzyme {
        config.enzyme_concentration = enzyme;
        changed = true;
    }
    if let Some(header_lines) = set_header_lines {
        config.header_lines = header_lines;
        changed = true;
    }
    if let Some(output) = set_output {
        config.output_format = output;
        changed = true;
    }
    if let Some(points) = set_curve_points {
        config.curve_points = points;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        output_config(format.unwrap_or(config.output_format), &config)?;
    }

    Ok(())
}
