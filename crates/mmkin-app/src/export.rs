//! Plot data export
//!
//! Writes the two series of the Lineweaver-Burk plot: the measured points and
//! the fitted line sampled across their 1/[S] range.

use std::io::Write;
use std::path::Path;

use mmkin_domain::service::sample_fit_line;
use mmkin_infra::plot_csv::{write_plot_csv, DATA_SERIES, FIT_SERIES};
use mmkin_types::Result;
use tracing::info;

use crate::app::AnalysisReport;

/// Write the plot series for `report` as CSV
pub fn export_plot_data<W: Write>(
    writer: W,
    report: &AnalysisReport,
    curve_points: usize,
    include_data: bool,
) -> Result<()> {
    let analysis = &report.analysis;
    let curve = sample_fit_line(&analysis.points, &analysis.fit, curve_points);

    let mut series = Vec::with_capacity(2);
    if include_data {
        series.push((DATA_SERIES, analysis.points.as_slice()));
    }
    series.push((FIT_SERIES, curve.as_slice()));

    write_plot_csv(writer, &series)
}

/// Same as [`export_plot_data`], creating or truncating `path`
pub fn export_plot_data_to_file(
    path: &Path,
    report: &AnalysisReport,
    curve_points: usize,
    include_data: bool,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    export_plot_data(file, report, curve_points, include_data)?;
    info!(path = %path.display(), curve_points, "exported plot data");
    Ok(())
}
