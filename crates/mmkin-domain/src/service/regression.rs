//! Ordinary least-squares straight line fit
//!
//! Solves the 2x2 normal equations in closed form:
//!
//! ```text
//! Δ = n·Sxx − Sx²
//! b = (Sy·Sxx − Sxy·Sx) / Δ
//! m = (n·Sxy − Sx·Sy) / Δ
//! ```

use mmkin_types::ArithmeticError;
use tracing::debug;

use crate::model::{FitStatistics, LineFit, ReciprocalPoint};

/// Δ at or below this fraction of n·Sxx is rounding noise from identical x values.
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Summary statistics feeding the normal equations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegressionSums {
    pub n: usize,
    pub s_x: f64,
    pub s_y: f64,
    pub s_xx: f64,
    pub s_xy: f64,
}

impl RegressionSums {
    pub fn accumulate(points: &[ReciprocalPoint]) -> Self {
        points.iter().fold(Self::default(), |acc, p| Self {
            n: acc.n + 1,
            s_x: acc.s_x + p.x,
            s_y: acc.s_y + p.y,
            s_xx: acc.s_xx + p.x * p.x,
            s_xy: acc.s_xy + p.x * p.y,
        })
    }

    /// Determinant of XᵀX
    pub fn determinant(&self) -> f64 {
        self.n as f64 * self.s_xx - self.s_x * self.s_x
    }

    fn is_degenerate(&self, delta: f64) -> bool {
        !delta.is_finite() || delta <= DEGENERACY_TOLERANCE * self.n as f64 * self.s_xx
    }
}

/// Least-squares line through `points`
pub fn fit_line(points: &[ReciprocalPoint]) -> Result<LineFit, ArithmeticError> {
    if points.len() < 2 {
        return Err(ArithmeticError::TooFewPoints { got: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(ArithmeticError::NonFinite { index });
    }

    let sums = RegressionSums::accumulate(points);
    let delta = sums.determinant();
    debug!(?sums, delta, "normal equation sums");

    if sums.is_degenerate(delta) {
        return Err(ArithmeticError::DegenerateFit);
    }

    let n = sums.n as f64;
    let intercept = (sums.s_y * sums.s_xx - sums.s_xy * sums.s_x) / delta;
    let slope = (n * sums.s_xy - sums.s_x * sums.s_y) / delta;

    Ok(LineFit::new(slope, intercept))
}

/// Residual statistics of `fit` over `points`
pub fn goodness_of_fit(points: &[ReciprocalPoint], fit: &LineFit) -> FitStatistics {
    let n = points.len();
    if n == 0 {
        return FitStatistics {
            n,
            ss_res: 0.0,
            ss_tot: 0.0,
            r_squared: 1.0,
            rmse: 0.0,
        };
    }

    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n as f64;
    let ss_res: f64 = points.iter().map(|p| (p.y - fit.predict(p.x)).powi(2)).sum();
    let ss_tot: f64 = points.iter().map(|p| (p.y - mean_y).powi(2)).sum();

    // Constant y is fitted exactly by a horizontal line.
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    FitStatistics {
        n,
        ss_res,
        ss_tot,
        r_squared,
        rmse: (ss_res / n as f64).sqrt(),
    }
}
