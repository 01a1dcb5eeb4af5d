//! Linear evaluation model.
//!
//! The engine scores a position as a weighted sum of its three feature
//! components:
//!
//! ```text
//! score = w0 × captureScore + w1 × sideScore + w2 × potentialScore
//! ```
//!
//! Training fits one weight triple per round; this module holds the model
//! itself and its scoring.

mod model;

pub use model::LinearModel;
