//! Domain model types

pub mod constants;
pub mod fit;
pub mod sample;

pub use constants::KineticConstants;
pub use fit::{FitStatistics, LineFit};
pub use sample::{ReciprocalPoint, Sample};
