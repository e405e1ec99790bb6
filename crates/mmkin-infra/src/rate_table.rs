//! Loader for whitespace-delimited rate tables
//!
//! ```text
//! # Reaction rates, v (in mM.s-1), for enzymatic kinetics of pepsin with
//! # bovine serum albumin (S, in mM)
//! S / mM	v / mM.s-1
//! 0.1		0.00339
//! 0.2		0.00549
//! ```
//!
//! The first `header_lines` lines are skipped unconditionally. After that,
//! blank lines and `#` comments are ignored and every remaining line must hold
//! at least two numeric columns: [S] then v.

use std::path::Path;

use mmkin_domain::model::Sample;
use mmkin_types::{DataFileError, Error, Result};
use tracing::{debug, info};

/// Read and parse a rate table from disk
pub fn load_rate_table(path: &Path, header_lines: usize) -> Result<Vec<Sample>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let samples = parse_rate_table(&content, header_lines)?;
    info!(path = %path.display(), samples = samples.len(), "loaded rate table");
    Ok(samples)
}

/// Parse rate table text
pub fn parse_rate_table(
    content: &str,
    header_lines: usize,
) -> std::result::Result<Vec<Sample>, DataFileError> {
    let mut samples = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(header_lines) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let sample = parse_line(line).map_err(|reason| DataFileError::Malformed {
            line: line_no,
            reason,
        })?;
        debug!(line = line_no, ?sample, "parsed sample");
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(DataFileError::Empty { header_lines });
    }
    Ok(samples)
}

fn parse_line(line: &str) -> std::result::Result<Sample, String> {
    let mut fields = line.split_whitespace();
    let substrate = parse_field(fields.next(), "substrate concentration")?;
    let rate = parse_field(fields.next(), "rate")?;
    Ok(Sample::new(substrate, rate))
}

fn parse_field(field: Option<&str>, name: &str) -> std::result::Result<f64, String> {
    let field = field.ok_or_else(|| format!("missing {} column", name))?;
    field
        .parse::<f64>()
        .map_err(|_| format!("{} '{}' is not a number", name, field))
}
