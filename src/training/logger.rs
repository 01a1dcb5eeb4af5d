//! Structured progress logging with verbosity levels.
//!
//! Progress goes to stderr: stdout is reserved for the fitted weight triples
//! so the output stays pasteable into the engine source.

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Warnings only.
    Warning,
    /// Per-round progress.
    #[default]
    Info,
    /// Detailed output.
    Debug,
}

/// Logger for training progress.
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    /// Create a logger with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log the start of a fitting run over `n_rounds` datasets.
    pub fn start_run(&self, n_rounds: usize) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("fitting {n_rounds} rounds");
        }
    }

    /// Log one fitted round: example count and mean squared error of the
    /// final weights over the round's dataset.
    pub fn log_round(&self, round: u32, n_examples: usize, mse: f64) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[round {round}] {n_examples} examples, mse={mse:.6}");
        }
    }

    /// Log the end of a fitting run.
    pub fn finish_run(&self) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("done");
        }
    }
}
