//! Application use cases

pub mod analysis_service;

pub use analysis_service::{
    analyze_file, predict_rates, transform_file, AnalysisOptions, AnalysisReport,
    AnalysisServiceError, RatePrediction, TransformedSample,
};
