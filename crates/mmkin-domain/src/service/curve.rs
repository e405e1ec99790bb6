//! Points along a fitted line, for plotting

use crate::model::{LineFit, ReciprocalPoint};

/// `count` evenly spaced values from `start` to `end`, both ends included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample `fit` over the x range covered by `points`
pub fn sample_fit_line(points: &[ReciprocalPoint], fit: &LineFit, count: usize) -> Vec<ReciprocalPoint> {
    let Some((min_x, max_x)) = x_range(points) else {
        return Vec::new();
    };

    linspace(min_x, max_x, count)
        .into_iter()
        .map(|x| ReciprocalPoint::new(x, fit.predict(x)))
        .collect()
}

fn x_range(points: &[ReciprocalPoint]) -> Option<(f64, f64)> {
    let first = points.first()?.x;
    Some(points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
}
