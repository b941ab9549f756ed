//! Patient feature vectors.
//!
//! A [`FeatureVector`] is the validated input to the estimator: exactly
//! thirteen finite numbers in the fixed order defined by
//! [`crate::schema::FeatureSchema`]. Construction is the validation
//! boundary — once a vector exists, scaling and inference cannot fail on
//! its account.

use itertools::Itertools;
use ndarray::Array1;

use crate::error::{HeartExpertError, Result};
use crate::schema::{FEATURE_COUNT, FeatureSchema};

/// An ordered vector of the thirteen clinical measurements
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a vector from already-numeric values
    ///
    /// Every measurement must be a real number; NaN and infinities are
    /// rejected with `InputValidation`.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self> {
        let schema = FeatureSchema::new();
        let bad: Vec<&str> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| schema.field(i).map_or("?", |f| f.label))
            .collect();

        if !bad.is_empty() {
            return Err(HeartExpertError::input_validation(format!(
                "non-numeric value for: {}",
                bad.iter().join(", ")
            )));
        }

        Ok(Self { values })
    }

    /// Parse a vector from thirteen raw text fields
    ///
    /// Fails with `InputValidation` when a field is missing, empty, or
    /// cannot be read as a number. No partial result is produced and no
    /// scaling or inference happens on failure.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        if raw.len() != FEATURE_COUNT {
            return Err(HeartExpertError::input_validation(format!(
                "expected {FEATURE_COUNT} fields, got {}",
                raw.len()
            )));
        }

        let schema = FeatureSchema::new();
        let mut values = [0.0; FEATURE_COUNT];
        let mut invalid = Vec::new();

        for (i, field) in raw.iter().enumerate() {
            let text = field.as_ref().trim();
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => values[i] = v,
                _ => invalid.push(schema.field(i).map_or("?", |f| f.label)),
            }
        }

        if !invalid.is_empty() {
            return Err(HeartExpertError::input_validation(format!(
                "please ensure all fields are filled with numbers (invalid: {})",
                invalid.iter().join(", ")
            )));
        }

        Ok(Self { values })
    }

    /// Raw values in schema order
    #[must_use]
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Copy the values into an `ndarray` vector for the artifact pipeline
    #[must_use]
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_iter(self.values.iter().copied())
    }
}
