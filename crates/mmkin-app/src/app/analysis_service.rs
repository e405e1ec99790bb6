//! Analysis Service - Core Use Case for Rate Table Analysis
//!
//! This service orchestrates the analysis workflow:
//! 1. Load the rate table
//! 2. Transform samples to reciprocal coordinates
//! 3. Fit the Lineweaver-Burk line
//! 4. Derive v_max, K_M and k_2
//! 5. Return a serializable report

use crate::config::Config;
use chrono::{DateTime, Utc};
use mmkin_domain::model::{ReciprocalPoint, Sample};
use mmkin_domain::service::{
    analyze, michaelis_menten_rate, reciprocal_transform, LineweaverBurkAnalysis,
};
use mmkin_infra::rate_table::load_rate_table;
use mmkin_types::{ArithmeticError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors specific to the analysis service
#[derive(Debug, Error)]
pub enum AnalysisServiceError {
    #[error("Failed to load rate table: {0}")]
    Load(Error),

    #[error("Kinetic analysis failed: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl From<Error> for AnalysisServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Arithmetic(e) => AnalysisServiceError::Arithmetic(e),
            other => AnalysisServiceError::Load(other),
        }
    }
}

impl From<AnalysisServiceError> for Error {
    fn from(err: AnalysisServiceError) -> Self {
        match err {
            AnalysisServiceError::Load(e) => e,
            AnalysisServiceError::Arithmetic(e) => Error::Arithmetic(e),
        }
    }
}

/// Options for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Total enzyme concentration [E]_0 (mM)
    pub enzyme_concentration: f64,

    /// Lines skipped at the top of the rate table
    pub header_lines: usize,
}

impl AnalysisOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enzyme_concentration: config.enzyme_concentration,
            header_lines: config.header_lines,
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of analyzing one rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: PathBuf,
    pub analyzed_at: DateTime<Utc>,
    pub samples: Vec<Sample>,
    #[serde(flatten)]
    pub analysis: LineweaverBurkAnalysis,
    /// -1/K_M, where the fitted line meets the 1/[S] axis
    pub x_intercept: Option<f64>,
}

/// A sample paired with its reciprocal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformedSample {
    #[serde(flatten)]
    pub sample: Sample,
    #[serde(flatten)]
    pub reciprocal: ReciprocalPoint,
}

/// Fitted Michaelis-Menten rate at a substrate concentration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePrediction {
    pub substrate: f64,
    pub rate: f64,
}

/// Load `path` and run the full Lineweaver-Burk analysis
pub fn analyze_file(
    path: &Path,
    options: &AnalysisOptions,
) -> Result<AnalysisReport, AnalysisServiceError> {
    let samples = load_rate_table(path, options.header_lines)?;
    let analysis = analyze(&samples, options.enzyme_concentration)?;

    info!(
        source = %path.display(),
        samples = samples.len(),
        v_max = analysis.constants.v_max,
        k_m = analysis.constants.k_m,
        k_2 = analysis.constants.k_2,
        "analysis complete"
    );

    Ok(AnalysisReport {
        source: path.to_path_buf(),
        analyzed_at: Utc::now(),
        x_intercept: analysis.fit.x_intercept(),
        samples,
        analysis,
    })
}

/// Load `path` and return each sample with its reciprocal coordinates
pub fn transform_file(
    path: &Path,
    options: &AnalysisOptions,
) -> Result<Vec<TransformedSample>, AnalysisServiceError> {
    let samples = load_rate_table(path, options.header_lines)?;
    let points = reciprocal_transform(&samples)?;

    Ok(samples
        .into_iter()
        .zip(points)
        .map(|(sample, reciprocal)| TransformedSample { sample, reciprocal })
        .collect())
}

/// Evaluate the fitted model at each substrate concentration
pub fn predict_rates(
    report: &AnalysisReport,
    substrates: &[f64],
) -> Result<Vec<RatePrediction>, AnalysisServiceError> {
    substrates
        .iter()
        .map(|&substrate| -> Result<RatePrediction, AnalysisServiceError> {
            let rate = michaelis_menten_rate(&report.analysis.constants, substrate)?;
            Ok(RatePrediction { substrate, rate })
        })
        .collect()
}
