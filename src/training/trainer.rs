//! Single-pass online gradient-descent trainer.
//!
//! Each round's dataset is fitted independently: weights start at
//! `(1.0, 1.0, 1.0)` and are adjusted after every example in file order.
//! There is exactly one pass and no convergence check; the fitted weights
//! are whatever the pass leaves behind. This regimen is what produced the
//! weight tables embedded in the engine, so it is preserved as-is rather
//! than iterated to convergence.
//!
//! # Example
//!
//! ```ignore
//! use evalfit::training::{SgdParams, SgdTrainer, SquaredLoss};
//!
//! let trainer = SgdTrainer::new(SquaredLoss, SgdParams::default());
//! let results = trainer.fit_range(Path::new("./data"), 16..=30)?;
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use crate::data::io::{self, DatasetLoadError};
use crate::data::Dataset;
use crate::linear::LinearModel;
use crate::training::{Loss, TrainingLogger, Verbosity};

/// Step size used for the reference weight tables.
pub const DEFAULT_LEARNING_RATE: f64 = 0.001;

/// Round indices covered by the reference run.
pub const DEFAULT_ROUNDS: RangeInclusive<u32> = 16..=30;

/// Errors from a fitting run.
///
/// The first failing round aborts the whole run; no partial result is
/// recorded for it.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("round {round}: {source}")]
    Dataset {
        round: u32,
        #[source]
        source: DatasetLoadError,
    },
}

/// Parameters for SGD training.
///
/// Use struct construction with `..Default::default()` for convenient
/// configuration.
#[derive(Debug, Clone)]
pub struct SgdParams {
    /// Step size for each per-example weight update.
    pub learning_rate: f64,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            verbosity: Verbosity::Info,
        }
    }
}

/// Online gradient-descent trainer for the linear evaluation model.
pub struct SgdTrainer<L: Loss> {
    loss: L,
    params: SgdParams,
}

impl<L: Loss> SgdTrainer<L> {
    /// Create a trainer with the given loss and parameters.
    pub fn new(loss: L, params: SgdParams) -> Self {
        Self { loss, params }
    }

    /// Fit weights to one dataset with a single sequential pass.
    ///
    /// For each example the score `z` is computed from the pre-update
    /// weights, then all three weights step with that same `z`: updates are
    /// simultaneous within an example and sequential across examples. An
    /// empty dataset returns the initial `(1.0, 1.0, 1.0)`.
    pub fn train(&self, dataset: &Dataset) -> LinearModel {
        let mut model = LinearModel::ones();
        let eta = self.params.learning_rate;

        for example in dataset {
            let z = model.score(&example.features);
            let grad = self.loss.gradient(z, example.target());

            let weights = model.weights_mut();
            for (w, &f) in weights.iter_mut().zip(&example.features) {
                *w -= eta * grad * f as f64;
            }
        }

        model
    }

    /// Fit every round in `rounds` in ascending order, loading each round's
    /// dataset from `data_dir`.
    ///
    /// Rounds are independent: each starts from fresh weights and sees only
    /// its own file. Returns `(round, model)` pairs in processing order, or
    /// the first error with the offending round attached.
    pub fn fit_range(
        &self,
        data_dir: &Path,
        rounds: RangeInclusive<u32>,
    ) -> Result<Vec<(u32, LinearModel)>, TrainError> {
        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_run(rounds.clone().count());

        let mut results = Vec::new();
        for round in rounds {
            let dataset = io::load_round(data_dir, round)
                .map_err(|source| TrainError::Dataset { round, source })?;

            let model = self.train(&dataset);

            if self.params.verbosity >= Verbosity::Info {
                logger.log_round(round, dataset.len(), self.mean_squared_error(&model, &dataset));
            }
            results.push((round, model));
        }

        logger.finish_run();
        Ok(results)
    }

    /// Mean squared error of a model over a dataset (for logging only).
    fn mean_squared_error(&self, model: &LinearModel, dataset: &Dataset) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }
        let sum: f64 = dataset
            .iter()
            .map(|ex| {
                let residual = model.score(&ex.features) - ex.target();
                residual * residual
            })
            .sum();
        sum / dataset.len() as f64
    }
}
