//! Dataset loading from per-round text files.
//!
//! Each round's file holds one example per line: three whitespace-separated
//! integer feature values followed by one integer outcome code. Blank lines
//! are not tolerated mid-file by the engine's exporter, but trailing newlines
//! are common, so fully empty lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{Dataset, Example, NUM_FEATURES};

mod error;

pub use error::DatasetLoadError;

/// Conventional path of a round's dataset inside a data directory.
///
/// Round `n` lives at `<dir>/data_<n>`.
pub fn round_path(dir: &Path, round: u32) -> PathBuf {
    dir.join(format!("data_{round}"))
}

/// Load a round's dataset from a file.
///
/// The file handle is scoped to this call; it is released on return whether
/// loading succeeds or fails.
pub fn load_round(dir: &Path, round: u32) -> Result<Dataset, DatasetLoadError> {
    let path = round_path(dir, round);
    let content = fs::read_to_string(path)?;
    parse_examples(&content)
}

/// Parse dataset content: one example per line, `NUM_FEATURES` integer
/// features followed by one integer outcome code.
///
/// Fails on the first malformed row; no partial dataset is produced.
pub fn parse_examples(content: &str) -> Result<Dataset, DatasetLoadError> {
    let mut examples = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != NUM_FEATURES + 1 {
            return Err(DatasetLoadError::RowFormat {
                line: line_idx + 1,
                expected: NUM_FEATURES + 1,
                got: tokens.len(),
            });
        }

        let mut fields = [0i64; NUM_FEATURES + 1];
        for (slot, token) in fields.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| DatasetLoadError::InvalidToken {
                line: line_idx + 1,
                token: (*token).to_string(),
            })?;
        }

        let features = [fields[0], fields[1], fields[2]];
        examples.push(Example::new(features, fields[NUM_FEATURES]));
    }

    Ok(Dataset::from_examples(examples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_rows_in_order() {
        let dataset = parse_examples("2 3 4 1\n-1 0 5 2\n7 7 7 0\n").unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.examples()[0], Example::new([2, 3, 4], 1));
        assert_eq!(dataset.examples()[1], Example::new([-1, 0, 5], 2));
        assert_eq!(dataset.examples()[2], Example::new([7, 7, 7], 0));
    }

    #[test]
    fn skips_blank_lines() {
        let dataset = parse_examples("1 2 3 1\n\n4 5 6 2\n\n").unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn empty_content_yields_empty_dataset() {
        let dataset = parse_examples("").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn rejects_short_row() {
        let err = parse_examples("1 2 3 1\n4 5\n").unwrap_err();
        match err {
            DatasetLoadError::RowFormat {
                line,
                expected,
                got,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(got, 2);
            }
            other => panic!("expected RowFormat, got {other:?}"),
        }
    }

    #[test]
    fn rejects_long_row() {
        let err = parse_examples("1 2 3 4 5\n").unwrap_err();
        assert!(matches!(
            err,
            DatasetLoadError::RowFormat {
                line: 1,
                expected: 4,
                got: 5
            }
        ));
    }

    #[test]
    fn rejects_non_integer_token() {
        let err = parse_examples("1 x 3 1\n").unwrap_err();
        match err {
            DatasetLoadError::InvalidToken { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn rejects_float_token() {
        // Fields are integers per the exported format; floats are malformed.
        let err = parse_examples("1.5 2 3 1\n").unwrap_err();
        assert!(matches!(err, DatasetLoadError::InvalidToken { line: 1, .. }));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = load_round(Path::new("/nonexistent-dir"), 16).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Io(_)));
    }

    #[test]
    fn round_path_follows_naming_convention() {
        let path = round_path(Path::new("./data"), 23);
        assert_eq!(path, PathBuf::from("./data/data_23"));
    }
}
