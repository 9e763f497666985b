// file: src/exporter/dense.rs
// description: single fully connected layer model with glorot-uniform initialisation
// reference: https://docs.rs/ndarray

use crate::error::{RagError, Result};
use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// `y = x · kernel + bias` with linear activation. The kernel is laid out
/// `[input_width, units]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub kernel: Array2<f32>,
    pub bias: Array1<f32>,
}

impl DenseLayer {
    pub fn glorot_uniform<R: Rng>(input_width: usize, units: usize, rng: &mut R) -> Self {
        let limit = (6.0 / (input_width + units) as f32).sqrt();
        let kernel = Array2::from_shape_fn((input_width, units), |_| rng.gen_range(-limit..=limit));

        Self {
            kernel,
            bias: Array1::zeros(units),
        }
    }

    pub fn input_width(&self) -> usize {
        self.kernel.nrows()
    }

    pub fn units(&self) -> usize {
        self.kernel.ncols()
    }

    pub fn forward(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != self.input_width() {
            return Err(RagError::Validation(format!(
                "Expected input of width {}, got {}",
                self.input_width(),
                input.len()
            )));
        }

        let output = ArrayView1::from(input).dot(&self.kernel) + &self.bias;
        Ok(output.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DenseModel {
    pub dense: DenseLayer,
}

impl DenseModel {
    /// Build with fresh weights. A seed makes the weights reproducible.
    pub fn build(input_width: usize, units: usize, seed: Option<u64>) -> Result<Self> {
        if input_width == 0 || units == 0 {
            return Err(RagError::Validation(
                "Layer dimensions must be greater than 0".to_string(),
            ));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            dense: DenseLayer::glorot_uniform(input_width, units, &mut rng),
        })
    }

    pub fn call(&self, inputs: &[f32]) -> Result<Vec<f32>> {
        self.dense.forward(inputs)
    }
}
