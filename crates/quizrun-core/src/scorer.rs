//! Answer scoring.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::ProblemSet;

/// Per-answer correctness plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// One entry per submitted answer, in problem order.
    pub results: Vec<bool>,
    /// Number of `true` entries in `results`.
    pub correct: usize,
    /// Size of the whole problem set, answered or not.
    pub total: usize,
}

impl Evaluation {
    /// The one-line summary, including the trailing newline.
    pub fn summary(&self) -> String {
        format!("Total correct: {} out of {}\n", self.correct, self.total)
    }

    /// Write the summary line to `out`.
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), QuizError> {
        out.write_all(self.summary().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Compare answers to problems by position with exact, case-sensitive equality.
///
/// Answers past the end of the problem set are ignored.
pub fn evaluate(problems: &ProblemSet, answers: &[String]) -> Evaluation {
    let results: Vec<bool> = problems
        .iter()
        .zip(answers)
        .map(|(problem, answer)| problem.answer() == answer)
        .collect();
    let correct = results.iter().filter(|&&ok| ok).count();

    Evaluation {
        results,
        correct,
        total: problems.len(),
    }
}
