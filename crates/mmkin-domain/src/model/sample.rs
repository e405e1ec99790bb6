use serde::{Deserialize, Serialize};

/// One measured row of a rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub substrate: f64, // [S] (mM)
    pub rate: f64,      // v (mM/s)
}

impl Sample {
    pub fn new(substrate: f64, rate: f64) -> Self {
        Self { substrate, rate }
    }
}

/// A sample in Lineweaver-Burk coordinates: x = 1/[S], y = 1/v
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalPoint {
    pub x: f64,
    pub y: f64,
}

impl ReciprocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for ReciprocalPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
