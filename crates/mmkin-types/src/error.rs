//! Error types for mmkin

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Problems with the contents of a rate table file
#[derive(Debug, Error, PartialEq)]
pub enum DataFileError {
    #[error("No data rows found after {header_lines} header line(s)")]
    Empty { header_lines: usize },

    #[error("Malformed data on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Numeric failures of the reciprocal transform, the regression, or the
/// derived constants
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("Division by zero: substrate concentration of sample {index} is zero")]
    ZeroSubstrate { index: usize },

    #[error("Division by zero: reaction rate of sample {index} is zero")]
    ZeroRate { index: usize },

    #[error("Non-finite value in sample {index}")]
    NonFinite { index: usize },

    #[error("Regression needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("Degenerate regression: all x values are identical (determinant is zero)")]
    DegenerateFit,

    #[error("Division by zero: fitted intercept is zero, v_max is undefined")]
    ZeroIntercept,

    #[error("Rate is undefined at substrate concentration {substrate}")]
    UndefinedRate { substrate: f64 },

    #[error("Enzyme concentration must be positive and finite, got {0}")]
    InvalidEnzymeConcentration(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data file error: {0}")]
    DataFile(#[from] DataFileError),

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
