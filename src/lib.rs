//! evalfit: fits board-evaluation weights with single-pass online SGD.
//!
//! Each per-round dataset holds integer feature rows labeled with a game
//! outcome. Training makes exactly one sequential pass over the rows and
//! adjusts a three-weight linear scoring function after every example. The
//! fitted triples are emitted as initializer-list text for embedding into
//! the engine's evaluation table.

pub mod data;
pub mod linear;
pub mod output;
pub mod training;
