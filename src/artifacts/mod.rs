//! Pre-trained artifact loading.
//!
//! The scaler and classifier are externally produced, serialized artifacts.
//! They stay opaque behind the two narrow traits defined here; the concrete
//! implementations only validate structure at load time and run the stored
//! parameters forward.

pub mod model;
pub mod scaler;

pub use model::{Activation, DenseLayer, DenseNetwork};
pub use scaler::StandardScaler;

use std::io::BufReader;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::de::DeserializeOwned;

use crate::error::util::safe_open_file;
use crate::error::{HeartExpertError, Result};

/// A fitted feature-scaling transform
///
/// Parameters were fit during an external training phase; applying the
/// transform never mutates them.
pub trait FeatureScaler: Send + Sync {
    /// Scale one raw feature vector
    fn transform(&self, raw: &Array1<f64>) -> Array1<f64>;

    /// Scale a batch of raw feature vectors, one per row
    fn transform_batch(&self, rows: &Array2<f64>) -> Array2<f64>;
}

/// A pre-trained classifier producing a risk probability
pub trait Classifier: Send + Sync {
    /// Probability for a single scaled vector
    fn predict(&self, scaled: &Array1<f64>) -> f64;

    /// One probability per row of scaled vectors
    fn predict_batch(&self, rows: &Array2<f64>) -> Array1<f64>;
}

/// Read and decode a JSON artifact with path-carrying errors
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    log::info!("Loading {kind} artifact from {}", path.display());
    let file = safe_open_file(path, kind)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        HeartExpertError::artifact_load(path, format!("malformed {kind} artifact: {e}"))
    })
}
