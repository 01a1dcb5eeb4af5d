//! Loss functions for computing gradients.

/// A loss function that computes per-example gradients for training.
pub trait Loss {
    /// Gradient of the loss with respect to the prediction.
    ///
    /// # Arguments
    ///
    /// * `pred` - Model score for the example
    /// * `target` - Ground truth target
    fn gradient(&self, pred: f64, target: f64) -> f64;

    /// Name of the loss function (for logging).
    fn name(&self) -> &'static str;
}

/// Squared error loss: L = 0.5 × (pred − target)²
///
/// grad = pred − target
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredLoss;

impl Loss for SquaredLoss {
    #[inline]
    fn gradient(&self, pred: f64, target: f64) -> f64 {
        pred - target
    }

    fn name(&self) -> &'static str {
        "squared_error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_loss_gradient_is_residual() {
        assert_eq!(SquaredLoss.gradient(9.0, 1.0), 8.0);
        assert_eq!(SquaredLoss.gradient(0.0, -1.0), 1.0);
        assert_eq!(SquaredLoss.gradient(0.5, 0.5), 0.0);
    }
}
