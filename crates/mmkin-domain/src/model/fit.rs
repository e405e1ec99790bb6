use serde::{Deserialize, Serialize};

/// Straight line y = slope * x + intercept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Where the line crosses y = 0. For a Lineweaver-Burk fit this is -1/K_M.
    ///
    /// `None` for a horizontal line.
    pub fn x_intercept(&self) -> Option<f64> {
        if self.slope == 0.0 {
            None
        } else {
            Some(-self.intercept / self.slope)
        }
    }
}

/// Residual summary of a fitted line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitStatistics {
    pub n: usize,
    /// Residual sum of squares
    pub ss_res: f64,
    /// Total sum of squares around the mean of y
    pub ss_tot: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Root mean squared residual
    pub rmse: f64,
}
