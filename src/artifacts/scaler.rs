//! Feature scaling artifact.
//!
//! Mirrors a standardization transform fit during training: each field is
//! centered on its training mean and divided by its training scale factor.
//! The artifact is a JSON document `{"mean": [...], "scale": [...]}` with
//! thirteen entries each.

use std::path::Path;

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use super::FeatureScaler;
use crate::error::{HeartExpertError, Result};
use crate::schema::FEATURE_COUNT;

/// Mean/variance standardization with parameters loaded from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-field training means
    mean: Vec<f64>,
    /// Per-field training scale factors (standard deviations)
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Construct from explicit parameters, validating their shape
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate(Path::new("(in-memory scaler)"))?;
        Ok(scaler)
    }

    /// Load fitted parameters from a JSON artifact
    pub fn load(path: &Path) -> Result<Self> {
        let scaler: Self = super::read_json(path, "scaler")?;
        scaler.validate(path)?;
        Ok(scaler)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(HeartExpertError::artifact_load(
                origin,
                format!(
                    "scaler expects {FEATURE_COUNT} fields, found mean={}, scale={}",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }

        if self
            .mean
            .iter()
            .chain(self.scale.iter())
            .any(|v| !v.is_finite())
        {
            return Err(HeartExpertError::artifact_load(
                origin,
                "scaler parameters must be finite",
            ));
        }

        if self.scale.iter().any(|s| *s == 0.0) {
            return Err(HeartExpertError::artifact_load(
                origin,
                "scaler has a zero scale factor",
            ));
        }

        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, raw: &Array1<f64>) -> Array1<f64> {
        Array1::from_iter(
            raw.iter()
                .zip(self.mean.iter().zip(&self.scale))
                .map(|(x, (m, s))| (x - m) / s),
        )
    }

    fn transform_batch(&self, rows: &Array2<f64>) -> Array2<f64> {
        let mut out = rows.clone();
        for mut row in out.axis_iter_mut(Axis(0)) {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[j]) / self.scale[j];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn uniform_scaler(mean: f64, scale: f64) -> StandardScaler {
        StandardScaler::new(vec![mean; FEATURE_COUNT], vec![scale; FEATURE_COUNT]).unwrap()
    }

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = uniform_scaler(10.0, 2.0);
        let raw = arr1(&[14.0; FEATURE_COUNT]);
        let scaled = scaler.transform(&raw);
        assert!(scaled.iter().all(|v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_identity_transform() {
        let scaler = uniform_scaler(0.0, 1.0);
        let raw = arr1(&[63.0; FEATURE_COUNT]);
        assert_eq!(scaler.transform(&raw), raw);
    }

    #[test]
    fn test_batch_matches_single() {
        let scaler = uniform_scaler(5.0, 0.5);
        let raw = arr1(&[7.5; FEATURE_COUNT]);
        let mut rows = Array2::zeros((2, FEATURE_COUNT));
        rows.row_mut(0).assign(&raw);
        rows.row_mut(1).assign(&raw);

        let scaled_rows = scaler.transform_batch(&rows);
        let scaled_single = scaler.transform(&raw);
        assert_eq!(scaled_rows.row(0), scaled_single.view());
        assert_eq!(scaled_rows.row(1), scaled_single.view());
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = StandardScaler::new(vec![0.0; 12], vec![1.0; FEATURE_COUNT]).unwrap_err();
        assert!(err.to_string().contains("expects 13 fields"));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[6] = 0.0;
        let err = StandardScaler::new(vec![0.0; FEATURE_COUNT], scale).unwrap_err();
        assert!(err.to_string().contains("zero scale factor"));
    }

    #[test]
    fn test_rejects_non_finite_mean() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        mean[0] = f64::NAN;
        assert!(StandardScaler::new(mean, vec![1.0; FEATURE_COUNT]).is_err());
    }
}
