//! Training data abstractions.
//!
//! A [`Dataset`] is an ordered sequence of integer feature rows, each labeled
//! with a game [`Outcome`]. Datasets are loaded from whitespace-separated
//! text files by the [`io`] module, one file per round.

pub mod io;

mod dataset;

pub use dataset::{Dataset, Example, Outcome, NUM_FEATURES};
