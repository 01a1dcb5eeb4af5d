//! Dataset and example types.

/// Number of feature values per example.
///
/// The evaluation function scores a position from three components
/// (capture score, side score, potential score), so every training row
/// carries exactly three features plus an outcome code.
pub const NUM_FEATURES: usize = 3;

/// Game outcome recorded for a training position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Outcome code 1.
    Win,
    /// Outcome code 2.
    Draw,
    /// Any other outcome code.
    Loss,
}

impl Outcome {
    /// Map a raw outcome code to an outcome.
    ///
    /// The mapping is total: `1` is a win, `2` is a draw, and every other
    /// integer is treated as a loss.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Outcome::Win,
            2 => Outcome::Draw,
            _ => Outcome::Loss,
        }
    }

    /// Regression target used for gradient computation.
    ///
    /// Win → `+1.0`, draw → `0.0`, loss → `-1.0`.
    #[inline]
    pub fn target(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.0,
            Outcome::Loss => -1.0,
        }
    }
}

/// A single labeled training row.
///
/// Features and the outcome code stay integers as parsed; conversion to
/// floating point happens only at the arithmetic in scoring and updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Feature values, in file order.
    pub features: [i64; NUM_FEATURES],
    /// Raw outcome code from the last column.
    pub outcome: i64,
}

impl Example {
    /// Create an example from its parsed fields.
    pub fn new(features: [i64; NUM_FEATURES], outcome: i64) -> Self {
        Self { features, outcome }
    }

    /// Regression target derived from the outcome code.
    #[inline]
    pub fn target(&self) -> f64 {
        Outcome::from_code(self.outcome).target()
    }
}

/// An ordered sequence of examples from one round's input file.
///
/// Order matters: the per-example gradient update is sequential, so iteration
/// always yields examples in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    examples: Vec<Example>,
}

impl Dataset {
    /// Create a dataset from already-parsed examples.
    pub fn from_examples(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if the dataset has no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterate over examples in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    /// Examples as a slice, in file order.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
