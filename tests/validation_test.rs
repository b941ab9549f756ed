//! Input validation: bad fields must fail before any scaling or inference.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{Array1, Array2};

use heartexpert::{
    Classifier, FeatureScaler, FeatureVector, HeartExpertError, RiskEstimator,
};

/// Scaler that records how often it is invoked
struct CountingScaler(Arc<AtomicUsize>);

impl FeatureScaler for CountingScaler {
    fn transform(&self, raw: &Array1<f64>) -> Array1<f64> {
        self.0.fetch_add(1, Ordering::SeqCst);
        raw.clone()
    }

    fn transform_batch(&self, rows: &Array2<f64>) -> Array2<f64> {
        self.0.fetch_add(1, Ordering::SeqCst);
        rows.clone()
    }
}

/// Classifier that records how often it is invoked
struct CountingClassifier(Arc<AtomicUsize>);

impl Classifier for CountingClassifier {
    fn predict(&self, _scaled: &Array1<f64>) -> f64 {
        self.0.fetch_add(1, Ordering::SeqCst);
        0.5
    }

    fn predict_batch(&self, rows: &Array2<f64>) -> Array1<f64> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Array1::from_elem(rows.nrows(), 0.5)
    }
}

fn counting_estimator() -> (RiskEstimator, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let scaler_calls = Arc::new(AtomicUsize::new(0));
    let model_calls = Arc::new(AtomicUsize::new(0));
    let estimator = RiskEstimator::new(
        Box::new(CountingScaler(scaler_calls.clone())),
        Box::new(CountingClassifier(model_calls.clone())),
    );
    (estimator, scaler_calls, model_calls)
}

#[test]
fn test_non_numeric_field_skips_scaling_and_inference() {
    let (estimator, scaler_calls, model_calls) = counting_estimator();

    let raw = [
        "abc", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0", "1",
    ];
    let result = FeatureVector::parse(&raw).and_then(|v| estimator.estimate(&v));

    assert!(matches!(
        result,
        Err(HeartExpertError::InputValidation { .. })
    ));
    assert_eq!(scaler_calls.load(Ordering::SeqCst), 0);
    assert_eq!(model_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_field_skips_scaling_and_inference() {
    let (estimator, scaler_calls, model_calls) = counting_estimator();

    // Twelve fields instead of thirteen
    let raw = ["63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0"];
    let result = FeatureVector::parse(&raw).and_then(|v| estimator.estimate(&v));

    assert!(matches!(
        result,
        Err(HeartExpertError::InputValidation { .. })
    ));
    assert_eq!(scaler_calls.load(Ordering::SeqCst), 0);
    assert_eq!(model_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_field_is_invalid() {
    let raw = [
        "63", "1", "3", "145", "", "1", "0", "150", "0", "2.3", "0", "0", "1",
    ];
    let err = FeatureVector::parse(&raw).unwrap_err();
    assert!(err.to_string().contains("Cholestoral"));
}

#[test]
fn test_error_names_every_invalid_field() {
    let raw = [
        "63", "male", "3", "145", "233", "1", "0", "150", "0", "high", "0", "0", "1",
    ];
    let err = FeatureVector::parse(&raw).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Sex"));
    assert!(message.contains("Oldpeak"));
}

#[test]
fn test_valid_input_reaches_the_model_once() {
    let (estimator, scaler_calls, model_calls) = counting_estimator();

    let raw = [
        "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0", "1",
    ];
    let verdict = FeatureVector::parse(&raw)
        .and_then(|v| estimator.estimate(&v))
        .unwrap();

    assert_eq!(verdict.probability(), 0.5);
    assert_eq!(scaler_calls.load(Ordering::SeqCst), 1);
    assert_eq!(model_calls.load(Ordering::SeqCst), 1);
}
