//! Linear model data structure and scoring.

use crate::data::NUM_FEATURES;

/// Three-weight linear scoring model.
///
/// Weights are `f64` from initialization onward; integer features are
/// converted at the point of arithmetic.
///
/// # Example
///
/// ```
/// use evalfit::linear::LinearModel;
///
/// let model = LinearModel::ones();
/// assert_eq!(model.score(&[2, 3, 4]), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: [f64; NUM_FEATURES],
}

impl LinearModel {
    /// Create a model with every weight set to `1.0`, the starting point of
    /// each round's training pass.
    pub fn ones() -> Self {
        Self {
            weights: [1.0; NUM_FEATURES],
        }
    }

    /// Create a model from explicit weights.
    pub fn from_weights(weights: [f64; NUM_FEATURES]) -> Self {
        Self { weights }
    }

    /// Weight for a feature index.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= NUM_FEATURES`.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    /// All weights, in feature order.
    #[inline]
    pub fn weights(&self) -> &[f64; NUM_FEATURES] {
        &self.weights
    }

    /// Mutable access to the weights (for training).
    #[inline]
    pub fn weights_mut(&mut self) -> &mut [f64; NUM_FEATURES] {
        &mut self.weights
    }

    /// Score a feature vector: the dot product of weights and features.
    ///
    /// Pure; no side effects.
    #[inline]
    pub fn score(&self, features: &[i64; NUM_FEATURES]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, &f)| w * f as f64)
            .sum()
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::ones()
    }
}
