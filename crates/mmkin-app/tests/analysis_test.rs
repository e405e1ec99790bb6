//! End-to-end tests for the analysis and export use cases

use std::path::PathBuf;

use mmkin_app::app::{
    analyze_file, predict_rates, transform_file, AnalysisOptions, AnalysisServiceError,
};
use mmkin_app::export::{export_plot_data, export_plot_data_to_file};
use mmkin_types::{ArithmeticError, Error};
use tempfile::tempdir;

fn pepsin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
        .join("pepsin.txt")
}

#[test]
fn test_analyze_pepsin_file() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let c = report.analysis.constants;

    assert_eq!(report.samples.len(), 7);
    assert!((c.v_max - 0.0145).abs() < 5e-5);
    assert!((c.k_m - 0.3267).abs() < 5e-5);
    assert!((c.k_2 - 0.5166).abs() < 5e-5);

    let x0 = report.x_intercept.unwrap();
    assert!((x0 + 1.0 / c.k_m).abs() < 1e-9);
}

#[test]
fn test_enzyme_concentration_only_scales_k2() {
    let base = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let options = AnalysisOptions {
        enzyme_concentration: 0.014,
        ..AnalysisOptions::default()
    };
    let halved = analyze_file(&pepsin_path(), &options).unwrap();

    assert_eq!(base.analysis.constants.v_max, halved.analysis.constants.v_max);
    assert!((halved.analysis.constants.k_2 - 2.0 * base.analysis.constants.k_2).abs() < 1e-12);
}

#[test]
fn test_transform_file() {
    let rows = transform_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    assert_eq!(rows.len(), 7);
    assert!((rows[0].reciprocal.x - 10.0).abs() < 1e-12);
    assert!((rows[0].reciprocal.y - 1.0 / 0.00339).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let err = analyze_file(&dir.path().join("missing.txt"), &AnalysisOptions::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisServiceError::Load(Error::FileNotFound(_))));
}

#[test]
fn test_zero_rate_is_arithmetic_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.txt");
    std::fs::write(&path, "a\nb\nc\n0.1 0.003\n0.5 0.0\n").unwrap();

    let err = analyze_file(&path, &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisServiceError::Arithmetic(ArithmeticError::ZeroRate { index: 1 })
    ));

    let top: Error = err.into();
    assert!(matches!(top, Error::Arithmetic(ArithmeticError::ZeroRate { .. })));
}

#[test]
fn test_degenerate_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.txt");
    std::fs::write(&path, "a\nb\nc\n2.0 0.003\n2.0 0.004\n").unwrap();

    let err = analyze_file(&path, &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisServiceError::Arithmetic(ArithmeticError::DegenerateFit)
    ));
}

#[test]
fn test_predict_rates() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let k_m = report.analysis.constants.k_m;
    let v_max = report.analysis.constants.v_max;

    let predictions = predict_rates(&report, &[k_m, 1.0]).unwrap();
    assert_eq!(predictions.len(), 2);
    assert!((predictions[0].rate - v_max / 2.0).abs() < 1e-12);
    assert!((predictions[1].rate - 0.0109).abs() < 1e-4);
}

#[test]
fn test_predict_rates_rejects_negative_substrate() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let k_m = report.analysis.constants.k_m;

    let err = predict_rates(&report, &[1.0, -k_m]).unwrap_err();
    assert!(matches!(
        err,
        AnalysisServiceError::Arithmetic(ArithmeticError::UndefinedRate { .. })
    ));
}

#[test]
fn test_report_json_shape() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["analyzed_at"].is_string());
    assert_eq!(json["samples"].as_array().map(Vec::len), Some(7));
    assert_eq!(json["points"].as_array().map(Vec::len), Some(7));
    assert!(json["constants"]["v_max"].is_number());
    assert!(json["statistics"]["r_squared"].is_number());
}

#[test]
fn test_export_plot_data() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();

    let mut out = Vec::new();
    export_plot_data(&mut out, &report, 10, true).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "series,inv_substrate,inv_rate");
    assert_eq!(lines.len(), 1 + 7 + 10);
    assert_eq!(lines.iter().filter(|l| l.starts_with("data,")).count(), 7);
    assert_eq!(lines.iter().filter(|l| l.starts_with("fit,")).count(), 10);
}

#[test]
fn test_export_fit_only_to_file() {
    let report = analyze_file(&pepsin_path(), &AnalysisOptions::default()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("curve.csv");

    export_plot_data_to_file(&path, &report, 100, false).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 101);
    assert!(text.lines().skip(1).all(|l| l.starts_with("fit,")));
}
