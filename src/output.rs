//! Output formatting for fitted weights.
//!
//! The primary format is an initializer-list line per round, pasteable
//! directly into the engine's weight table:
//!
//! ```text
//! {0.642656, -0.025575, 0.007332},
//! ```
//!
//! Formatting is pure and independent of how the weights were produced, so
//! the JSON report below can be substituted without touching training.

use serde::Serialize;

use crate::linear::LinearModel;

/// Format a model as an initializer-list line: `{w0, w1, w2},` with six
/// fractional digits per weight.
pub fn format_weights(model: &LinearModel) -> String {
    let w = model.weights();
    format!("{{{:.6}, {:.6}, {:.6}}},", w[0], w[1], w[2])
}

/// One round's fitted weights, for structured output.
#[derive(Debug, Serialize)]
pub struct RoundWeights {
    pub round: u32,
    pub weights: [f64; 3],
}

/// A full fitting run, for structured output.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub learning_rate: f64,
    pub rounds: Vec<RoundWeights>,
}

impl RunReport {
    /// Build a report from fitting results in processing order.
    pub fn new(learning_rate: f64, results: &[(u32, LinearModel)]) -> Self {
        let rounds = results
            .iter()
            .map(|(round, model)| RoundWeights {
                round: *round,
                weights: *model.weights(),
            })
            .collect();
        Self {
            learning_rate,
            rounds,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
