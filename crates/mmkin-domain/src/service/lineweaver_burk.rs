//! Lineweaver-Burk analysis
//!
//! Linearizes Michaelis-Menten data by plotting 1/v against 1/[S], fits a
//! straight line and reads the kinetic constants off its slope and intercept.

use mmkin_types::ArithmeticError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{FitStatistics, KineticConstants, LineFit, ReciprocalPoint, Sample};
use crate::service::regression::{fit_line, goodness_of_fit};

/// Everything derived from one rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineweaverBurkAnalysis {
    pub points: Vec<ReciprocalPoint>,
    pub fit: LineFit,
    pub statistics: FitStatistics,
    pub constants: KineticConstants,
}

/// Map each sample to (1/[S], 1/v). Zero values are rejected before any
/// division happens.
pub fn reciprocal_transform(samples: &[Sample]) -> Result<Vec<ReciprocalPoint>, ArithmeticError> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            if !(sample.substrate.is_finite() && sample.rate.is_finite()) {
                return Err(ArithmeticError::NonFinite { index });
            }
            if sample.substrate == 0.0 {
                return Err(ArithmeticError::ZeroSubstrate { index });
            }
            if sample.rate == 0.0 {
                return Err(ArithmeticError::ZeroRate { index });
            }
            if sample.substrate < 0.0 || sample.rate < 0.0 {
                warn!(index, ?sample, "negative concentration or rate in sample");
            }
            Ok(ReciprocalPoint::new(1.0 / sample.substrate, 1.0 / sample.rate))
        })
        .collect()
}

/// Transform, fit and derive v_max, K_M and k_2 for the given [E]_0 (mM)
pub fn analyze(
    samples: &[Sample],
    enzyme_concentration: f64,
) -> Result<LineweaverBurkAnalysis, ArithmeticError> {
    let points = reciprocal_transform(samples)?;
    let fit = fit_line(&points)?;
    let constants = KineticConstants::from_fit(&fit, enzyme_concentration)?;
    let statistics = goodness_of_fit(&points, &fit);

    debug!(
        slope = fit.slope,
        intercept = fit.intercept,
        v_max = constants.v_max,
        k_m = constants.k_m,
        k_2 = constants.k_2,
        r_squared = statistics.r_squared,
        "lineweaver-burk fit"
    );

    Ok(LineweaverBurkAnalysis {
        points,
        fit,
        statistics,
        constants,
    })
}

/// Rate predicted by v = v_max·[S] / (K_M + [S])
///
/// [S] must be finite and non-negative, and the result finite.
pub fn michaelis_menten_rate(
    constants: &KineticConstants,
    substrate: f64,
) -> Result<f64, ArithmeticError> {
    if !(substrate.is_finite() && substrate >= 0.0) {
        return Err(ArithmeticError::UndefinedRate { substrate });
    }
    let rate = constants.v_max * substrate / (constants.k_m + substrate);
    if !rate.is_finite() {
        return Err(ArithmeticError::UndefinedRate { substrate });
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rates generated from the model itself, so the reciprocal plot is exact.
    fn model_samples(v_max: f64, k_m: f64) -> Vec<Sample> {
        [0.1, 0.25, 0.5, 1.0, 2.0, 8.0]
            .iter()
            .map(|&s| Sample::new(s, v_max * s / (k_m + s)))
            .collect()
    }

    #[test]
    fn test_reciprocal_transform() {
        let points =
            reciprocal_transform(&[Sample::new(0.5, 0.004), Sample::new(4.0, 0.01)]).unwrap();
        assert_eq!(points[0], ReciprocalPoint::new(2.0, 250.0));
        assert_eq!(points[1], ReciprocalPoint::new(0.25, 100.0));
    }

    #[test]
    fn test_zero_rate_rejected_before_fit() {
        // A single sample would fail the fit; the zero rate must be reported first.
        let err = reciprocal_transform(&[Sample::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, ArithmeticError::ZeroRate { index: 0 });

        let samples = [Sample::new(0.1, 0.003), Sample::new(0.2, 0.0)];
        assert_eq!(analyze(&samples, 0.028), Err(ArithmeticError::ZeroRate { index: 1 }));
    }

    #[test]
    fn test_zero_substrate_rejected() {
        let samples = [Sample::new(0.0, 0.003), Sample::new(0.2, 0.005)];
        assert_eq!(
            reciprocal_transform(&samples),
            Err(ArithmeticError::ZeroSubstrate { index: 0 })
        );
    }

    #[test]
    fn test_nan_rejected() {
        let samples = [Sample::new(0.1, f64::NAN)];
        assert_eq!(
            reciprocal_transform(&samples),
            Err(ArithmeticError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn test_analyze_recovers_model_constants() {
        let analysis = analyze(&model_samples(0.02, 0.4), 0.01).unwrap();
        assert!((analysis.constants.v_max - 0.02).abs() < 1e-10);
        assert!((analysis.constants.k_m - 0.4).abs() < 1e-9);
        assert!((analysis.constants.k_2 - 2.0).abs() < 1e-8);
        assert!((analysis.statistics.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(analysis.points.len(), 6);
    }

    #[test]
    fn test_x_intercept_is_negative_reciprocal_km() {
        let analysis = analyze(&model_samples(0.02, 0.4), 0.01).unwrap();
        let x0 = analysis.fit.x_intercept().unwrap();
        assert!((x0 + 1.0 / 0.4).abs() < 1e-8);
    }

    #[test]
    fn test_identical_substrate_is_degenerate() {
        let samples = [Sample::new(2.0, 0.01), Sample::new(2.0, 0.012)];
        assert_eq!(analyze(&samples, 0.028), Err(ArithmeticError::DegenerateFit));
    }

    #[test]
    fn test_michaelis_menten_rate() {
        let constants = KineticConstants {
            v_max: 0.02,
            k_m: 0.4,
            k_2: 2.0,
            enzyme_concentration: 0.01,
        };
        assert!((michaelis_menten_rate(&constants, 0.4).unwrap() - 0.01).abs() < 1e-15);
        assert_eq!(michaelis_menten_rate(&constants, 0.0), Ok(0.0));
        assert!(michaelis_menten_rate(&constants, 1e9).unwrap() < 0.02);
    }

    #[test]
    fn test_michaelis_menten_rate_rejects_pole_and_bad_input() {
        let constants = KineticConstants {
            v_max: 0.02,
            k_m: 0.4,
            k_2: 2.0,
            enzyme_concentration: 0.01,
        };
        for s in [-0.4, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                michaelis_menten_rate(&constants, s),
                Err(ArithmeticError::UndefinedRate { .. })
            ));
        }

        // Negative K_M from a poorly conditioned fit: pole at [S] = -K_M
        let inverted = KineticConstants { k_m: -0.5, ..constants };
        assert_eq!(
            michaelis_menten_rate(&inverted, 0.5),
            Err(ArithmeticError::UndefinedRate { substrate: 0.5 })
        );
    }
}
