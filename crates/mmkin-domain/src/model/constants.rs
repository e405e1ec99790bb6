//! Kinetic constants derived from a Lineweaver-Burk line
//!
//! With 1/v = (K_M / v_max)(1/[S]) + 1/v_max the intercept gives
//! v_max = 1/b, the slope gives K_M = m * v_max, and the catalytic rate is
//! k_2 = v_max / [E]_0.

use mmkin_types::ArithmeticError;
use serde::{Deserialize, Serialize};

use super::LineFit;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticConstants {
    /// Maximum reaction rate (mM/s)
    pub v_max: f64,
    /// Michaelis constant (mM)
    pub k_m: f64,
    /// Catalytic rate constant (1/s)
    pub k_2: f64,
    /// Total enzyme concentration [E]_0 used for k_2 (mM)
    pub enzyme_concentration: f64,
}

impl KineticConstants {
    pub fn from_fit(fit: &LineFit, enzyme_concentration: f64) -> Result<Self, ArithmeticError> {
        if !(enzyme_concentration.is_finite() && enzyme_concentration > 0.0) {
            return Err(ArithmeticError::InvalidEnzymeConcentration(enzyme_concentration));
        }

        let v_max = 1.0 / fit.intercept;
        if fit.intercept == 0.0 || !v_max.is_finite() {
            return Err(ArithmeticError::ZeroIntercept);
        }

        Ok(Self {
            v_max,
            k_m: fit.slope * v_max,
            k_2: v_max / enzyme_concentration,
            enzyme_concentration,
        })
    }
}
