//! A Rust library for estimating cardiovascular risk from thirteen clinical
//! measurements, using a pre-trained feature scaler and classifier loaded
//! from disk.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod estimator;
pub mod features;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EstimatorConfig;
pub use error::{HeartExpertError, Result};
pub use estimator::{RISK_THRESHOLD, RiskEstimator, RiskLabel, RiskVerdict};
pub use features::FeatureVector;
pub use schema::{FEATURE_COUNT, FeatureSchema};

// Artifact interfaces
pub use artifacts::{Classifier, DenseNetwork, FeatureScaler, StandardScaler};

// Reporting
pub use report::AssessmentReport;
