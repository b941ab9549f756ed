//! Configuration for the risk estimator.

use std::path::PathBuf;

/// Configuration for constructing a `RiskEstimator`
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Path to the serialized classifier artifact
    pub model_path: PathBuf,
    /// Path to the serialized feature-scaling artifact
    pub scaler_path: PathBuf,
    /// Log a warning when a field value falls outside its advisory range
    pub warn_out_of_range: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("heart_model.json"),
            scaler_path: PathBuf::from("scaler.json"),
            warn_out_of_range: true,
        }
    }
}
