//! The risk estimation service.
//!
//! [`RiskEstimator`] owns the loaded scaler and classifier and exposes the
//! one meaningful operation in the system: turn a validated feature vector
//! into a [`RiskVerdict`]. The artifacts are loaded once at startup and
//! never mutated, so estimation is a pure function of its input.

use ndarray::Array2;

use crate::artifacts::{Classifier, DenseNetwork, FeatureScaler, StandardScaler};
use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::schema::{FEATURE_COUNT, FeatureSchema};

/// Decision boundary between "normal" and "risk detected"
///
/// Exclusive on the high side: a probability of exactly 0.5 is normal.
pub const RISK_THRESHOLD: f64 = 0.5;

/// Thresholded interpretation of a risk probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    /// Probability strictly above the threshold
    RiskDetected,
    /// Probability at or below the threshold
    Normal,
}

/// Estimated probability of cardiovascular risk for one patient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskVerdict {
    probability: f64,
}

impl RiskVerdict {
    /// Wrap a classifier probability
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Raw probability in [0, 1]
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Thresholded label
    #[must_use]
    pub fn label(&self) -> RiskLabel {
        if self.probability > RISK_THRESHOLD {
            RiskLabel::RiskDetected
        } else {
            RiskLabel::Normal
        }
    }
}

/// Risk estimation service holding the loaded artifacts
///
/// Constructed once at process start; the scaler and classifier are opaque
/// and immutable for the lifetime of the estimator.
pub struct RiskEstimator {
    scaler: Box<dyn FeatureScaler>,
    model: Box<dyn Classifier>,
    schema: FeatureSchema,
    warn_out_of_range: bool,
}

impl std::fmt::Debug for RiskEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEstimator")
            .field("schema", &self.schema)
            .field("warn_out_of_range", &self.warn_out_of_range)
            .finish()
    }
}

impl RiskEstimator {
    /// Load both artifacts and build the estimator
    ///
    /// A missing or corrupt artifact fails here, before any estimation can
    /// be attempted.
    pub fn from_config(config: &EstimatorConfig) -> Result<Self> {
        let scaler = StandardScaler::load(&config.scaler_path)?;
        let model = DenseNetwork::load(&config.model_path)?;
        Ok(Self::new(Box::new(scaler), Box::new(model))
            .with_domain_warnings(config.warn_out_of_range))
    }

    /// Build from already-loaded artifacts
    ///
    /// Useful for tests and for callers with their own artifact formats
    /// behind the [`FeatureScaler`] and [`Classifier`] traits.
    #[must_use]
    pub fn new(scaler: Box<dyn FeatureScaler>, model: Box<dyn Classifier>) -> Self {
        Self {
            scaler,
            model,
            schema: FeatureSchema::new(),
            warn_out_of_range: true,
        }
    }

    /// Enable or disable advisory out-of-range warnings
    #[must_use]
    pub fn with_domain_warnings(mut self, enabled: bool) -> Self {
        self.warn_out_of_range = enabled;
        self
    }

    /// Estimate the risk probability for one patient
    pub fn estimate(&self, vector: &FeatureVector) -> Result<RiskVerdict> {
        self.warn_on_advisory_domains(vector);

        let scaled = self.scaler.transform(&vector.to_array());
        let probability = self.model.predict(&scaled);
        log::debug!("estimated risk probability {probability:.4}");

        Ok(RiskVerdict::new(probability))
    }

    /// Estimate probabilities for several patients in one model call
    pub fn estimate_batch(&self, vectors: &[FeatureVector]) -> Result<Vec<RiskVerdict>> {
        if vectors.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = Array2::zeros((vectors.len(), FEATURE_COUNT));
        for (i, vector) in vectors.iter().enumerate() {
            self.warn_on_advisory_domains(vector);
            rows.row_mut(i).assign(&vector.to_array());
        }

        let scaled = self.scaler.transform_batch(&rows);
        let probabilities = self.model.predict_batch(&scaled);
        Ok(probabilities.iter().map(|p| RiskVerdict::new(*p)).collect())
    }

    // Out-of-domain values are scored unchanged; the schema check only logs.
    fn warn_on_advisory_domains(&self, vector: &FeatureVector) {
        if !self.warn_out_of_range {
            return;
        }
        for field in self.schema.out_of_domain(vector.values()) {
            log::warn!(
                "{} is outside the usual range ({}) - passing it to the model unchanged",
                field.label,
                field.hint
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_exclusive_on_the_high_side() {
        assert_eq!(RiskVerdict::new(0.5).label(), RiskLabel::Normal);
        assert_eq!(RiskVerdict::new(0.500_000_01).label(), RiskLabel::RiskDetected);
    }

    #[test]
    fn test_extreme_probabilities() {
        assert_eq!(RiskVerdict::new(0.0).label(), RiskLabel::Normal);
        assert_eq!(RiskVerdict::new(1.0).label(), RiskLabel::RiskDetected);
    }
}
