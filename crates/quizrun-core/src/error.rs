//! Quiz error types.
//!
//! Only failures that abort a run are represented here. Malformed rows,
//! unreadable answer lines and an elapsed deadline are handled in place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problem file could not be opened.
    #[error("cannot read file, file doesn't exist: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The problem file is not well-formed CSV.
    #[error("unable to parse csv file: {}{}", path.display(), line_suffix(*line))]
    Parse {
        path: PathBuf,
        /// 1-based line where the parser gave up, when known.
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// Writing a prompt or the summary failed.
    #[error("failed to write quiz output")]
    Output(#[from] io::Error),
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Coarse classification of a [`QuizError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Parse,
    Output,
}

impl QuizError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::FileNotFound { .. } => ErrorKind::FileNotFound,
            QuizError::Parse { .. } => ErrorKind::Parse,
            QuizError::Output(_) => ErrorKind::Output,
        }
    }
}
