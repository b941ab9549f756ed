//! Classifier artifact.
//!
//! A feedforward network deserialized from an external training run and
//! used purely for inference: the forward pass takes `&self` and the
//! weights never change after load. Structural validation at load time
//! guarantees a thirteen-wide input and a single sigmoid output, so every
//! prediction is a probability in [0, 1].

use std::path::Path;

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use super::Classifier;
use crate::error::{HeartExpertError, Result};
use crate::schema::FEATURE_COUNT;

/// Activation functions a serialized network may reference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Activation {
    /// Rectified Linear Unit: max(0, x)
    ReLU,
    /// Sigmoid: 1 / (1 + exp(-x))
    Sigmoid,
    /// Hyperbolic tangent
    Tanh,
    /// Linear (identity): x
    Linear,
}

impl Activation {
    fn apply(self, z: &Array2<f64>) -> Array2<f64> {
        match self {
            Self::ReLU => z.mapv(|v| v.max(0.0)),
            Self::Sigmoid => z.mapv(|v| 1.0 / (1.0 + (-v).exp())),
            Self::Tanh => z.mapv(f64::tanh),
            Self::Linear => z.clone(),
        }
    }
}

/// One dense layer: output = activation(input @ weights + biases)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Weight matrix (input_size x output_size)
    weights: Array2<f64>,
    /// Bias vector (output_size)
    biases: Array1<f64>,
    /// Activation applied to the layer output
    activation: Activation,
}

impl DenseLayer {
    /// Create a layer from explicit parameters
    #[must_use]
    pub fn new(weights: Array2<f64>, biases: Array1<f64>, activation: Activation) -> Self {
        Self {
            weights,
            biases,
            activation,
        }
    }

    fn forward(&self, input: &Array2<f64>) -> Array2<f64> {
        let mut z = input.dot(&self.weights);
        for mut row in z.rows_mut() {
            row += &self.biases;
        }
        self.activation.apply(&z)
    }

    fn input_size(&self) -> usize {
        self.weights.nrows()
    }

    fn output_size(&self) -> usize {
        self.weights.ncols()
    }
}

/// Pre-trained feedforward classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Build a network from explicit layers, validating its structure
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self> {
        let network = Self { layers };
        network.validate(Path::new("(in-memory model)"))?;
        Ok(network)
    }

    /// Load a trained network from a JSON artifact
    pub fn load(path: &Path) -> Result<Self> {
        let network: Self = super::read_json(path, "model")?;
        network.validate(path)?;
        Ok(network)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        let Some(first) = self.layers.first() else {
            return Err(HeartExpertError::artifact_load(
                origin,
                "model has no layers",
            ));
        };

        if first.input_size() != FEATURE_COUNT {
            return Err(HeartExpertError::artifact_load(
                origin,
                format!(
                    "model expects {} input features, this system provides {FEATURE_COUNT}",
                    first.input_size()
                ),
            ));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            if layer.biases.len() != layer.output_size() {
                return Err(HeartExpertError::artifact_load(
                    origin,
                    format!(
                        "layer {i} has {} biases for {} outputs",
                        layer.biases.len(),
                        layer.output_size()
                    ),
                ));
            }

            if let Some(next) = self.layers.get(i + 1) {
                if layer.output_size() != next.input_size() {
                    return Err(HeartExpertError::artifact_load(
                        origin,
                        format!(
                            "layer {i} produces {} values but layer {} expects {}",
                            layer.output_size(),
                            i + 1,
                            next.input_size()
                        ),
                    ));
                }
            }

            if layer.weights.iter().chain(layer.biases.iter()).any(|v| !v.is_finite()) {
                return Err(HeartExpertError::artifact_load(
                    origin,
                    format!("layer {i} contains non-finite parameters"),
                ));
            }
        }

        // The output contract is a single probability; sigmoid keeps it in [0, 1]
        if let Some(last) = self.layers.last() {
            if last.output_size() != 1 {
                return Err(HeartExpertError::artifact_load(
                    origin,
                    format!("model produces {} outputs, expected 1", last.output_size()),
                ));
            }
            if last.activation != Activation::Sigmoid {
                return Err(HeartExpertError::artifact_load(
                    origin,
                    "model output layer must use a sigmoid activation",
                ));
            }
        }

        Ok(())
    }

    fn forward(&self, input: &Array2<f64>) -> Array2<f64> {
        let mut output = input.clone();
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        output
    }
}

impl Classifier for DenseNetwork {
    fn predict(&self, scaled: &Array1<f64>) -> f64 {
        let input = scaled.clone().insert_axis(Axis(0));
        self.forward(&input)[[0, 0]]
    }

    fn predict_batch(&self, rows: &Array2<f64>) -> Array1<f64> {
        self.forward(rows).column(0).to_owned()
    }
}
