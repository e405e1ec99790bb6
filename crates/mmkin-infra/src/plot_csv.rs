//! CSV output for the Lineweaver-Burk plot data

use std::io::Write;
use std::path::Path;

use mmkin_domain::model::ReciprocalPoint;
use mmkin_types::Result;
use serde::Serialize;

/// Series label for measured points
pub const DATA_SERIES: &str = "data";
/// Series label for the sampled fit line
pub const FIT_SERIES: &str = "fit";

#[derive(Debug, Serialize)]
struct PlotRow<'a> {
    series: &'a str,
    inv_substrate: f64,
    inv_rate: f64,
}

/// Write labelled point series as `series,inv_substrate,inv_rate` rows
pub fn write_plot_csv<W: Write>(writer: W, series: &[(&str, &[ReciprocalPoint])]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (label, points) in series {
        for p in points.iter() {
            wtr.serialize(PlotRow {
                series: *label,
                inv_substrate: p.x,
                inv_rate: p.y,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Same as [`write_plot_csv`], creating or truncating `path`
pub fn write_plot_csv_file(path: &Path, series: &[(&str, &[ReciprocalPoint])]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plot_csv(file, series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_plot_csv() {
        let data = [ReciprocalPoint::new(10.0, 295.0), ReciprocalPoint::new(0.05, 70.3)];
        let fit = [ReciprocalPoint::new(0.05, 70.0)];
        let mut out = Vec::new();
        write_plot_csv(&mut out, &[(DATA_SERIES, &data[..]), (FIT_SERIES, &fit[..])]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "series,inv_substrate,inv_rate");
        assert_eq!(lines[1], "data,10.0,295.0");
        assert_eq!(lines[2], "data,0.05,70.3");
        assert_eq!(lines[3], "fit,0.05,70.0");
        assert_eq!(lines.len(), 4);
    }
}
