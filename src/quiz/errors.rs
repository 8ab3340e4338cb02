//! Error types raised while loading or drawing from the question bank.
use std::{io, path::PathBuf};

use thiserror::Error;

/// A draw was attempted against a bank with zero entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("question bank is empty")]
pub struct EmptyQuestionBank;

/// Failures reading the tabular question source.
#[derive(Debug, Error)]
pub enum QuestionLoadError {
    #[error("failed to open question source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed question table: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(EmptyQuestionBank.to_string(), "question bank is empty");

        let io_error = QuestionLoadError::Io {
            path: PathBuf::from("assets/quiz.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let message = io_error.to_string();
        assert!(message.contains("assets/quiz.csv"));
        assert!(message.contains("gone"));
    }
}
