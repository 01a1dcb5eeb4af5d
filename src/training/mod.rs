//! Training infrastructure.
//!
//! - [`Loss`], [`SquaredLoss`]: gradient of the per-example loss
//! - [`SgdTrainer`], [`SgdParams`]: single-pass online gradient descent
//! - [`TrainingLogger`], [`Verbosity`]: progress reporting
//! - [`TrainError`]: run-level errors with the offending round attached

mod logger;
mod loss;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use loss::{Loss, SquaredLoss};
pub use trainer::{SgdParams, SgdTrainer, TrainError, DEFAULT_LEARNING_RATE, DEFAULT_ROUNDS};
