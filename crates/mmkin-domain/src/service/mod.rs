//! Domain services

pub mod curve;
pub mod lineweaver_burk;
pub mod regression;

pub use curve::{linspace, sample_fit_line};
pub use lineweaver_burk::{
    analyze, michaelis_menten_rate, reciprocal_transform, LineweaverBurkAnalysis,
};
pub use regression::{fit_line, goodness_of_fit, RegressionSums};
