//! Output formatting module

use mmkin_app::app::{AnalysisReport, RatePrediction, TransformedSample};
use mmkin_app::config::Config;
use mmkin_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &AnalysisReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    let analysis = &report.analysis;
    let c = &analysis.constants;

    println!("\nLineweaver-Burk Fit");
    println!("===================");
    println!("Source:          {}", report.source.display());
    println!("Samples:         {}", report.samples.len());

    println!("\n--- 1/v = m·(1/[S]) + b ---");
    println!("Slope m:         {:.4} s", analysis.fit.slope);
    println!("Intercept b:     {:.4} s/mM", analysis.fit.intercept);
    if let Some(x0) = report.x_intercept {
        println!("x-intercept:     {:.4} 1/mM", x0);
    }
    println!("R²:              {:.6}", analysis.statistics.r_squared);
    println!("---------------------------");

    println!("vmax = {:.4} mM/s", c.v_max);
    println!("Km   = {:.4} mM", c.k_m);
    println!("k2   = {:.4} s^-1", c.k_2);
    println!("\n([E]_0 = {} mM)", c.enzyme_concentration);

    Ok(())
}

pub fn output_transform(output_format: OutputFormat, rows: &[TransformedSample]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rows)?;
        println!("{}", content);
        return Ok(());
    }

    println!("{:>12} {:>12} {:>14} {:>14}", "[S] (mM)", "v (mM/s)", "1/[S] (1/mM)", "1/v (s/mM)");
    for row in rows {
        println!(
            "{:>12} {:>12} {:>14.4} {:>14.4}",
            row.sample.substrate, row.sample.rate, row.reciprocal.x, row.reciprocal.y
        );
    }

    Ok(())
}

pub fn output_predictions(
    output_format: OutputFormat,
    report: &AnalysisReport,
    predictions: &[RatePrediction],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(predictions)?;
        println!("{}", content);
        return Ok(());
    }

    let c = &report.analysis.constants;
    println!("v = {:.4}·[S] / ({:.4} + [S])", c.v_max, c.k_m);
    println!("{:>12} {:>14}", "[S] (mM)", "v (mM/s)");
    for p in predictions {
        println!("{:>12} {:>14.6}", p.substrate, p.rate);
    }

    Ok(())
}

pub fn output_config(output_format: OutputFormat, config: &Config) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(config)?;
        println!("{}", content);
    } else {
        print!("{}", config);
        if let Ok(path) = Config::config_path() {
            println!();
            println!("Config file:    {}", path.display());
        }
    }
    Ok(())
}
