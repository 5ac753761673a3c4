//! Core data model types for quizrun.
//!
//! Records come out of the CSV reader, problems come out of the builder, and
//! answers come out of the interactive session.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// The text fields of one CSV row, in order.
pub type RawRecord = Vec<String>;

/// A single question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Build a problem from a record with exactly two fields.
    pub fn from_record(record: RawRecord) -> Option<Self> {
        let [question, answer]: [String; 2] = record.try_into().ok()?;
        Some(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// An ordered collection of problems, shown to the user as #1..#N.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemSet(Vec<Problem>);

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self(problems)
    }

    pub fn into_inner(self) -> Vec<Problem> {
        self.0
    }
}

impl Deref for ProblemSet {
    type Target = [Problem];

    fn deref(&self) -> &[Problem] {
        &self.0
    }
}

impl FromIterator<Problem> for ProblemSet {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trimmed responses, positionally aligned with a [`ProblemSet`].
///
/// Shorter than the problem set when the session deadline cut it off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, answer: impl Into<String>) {
        self.0.push(answer.into());
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for AnswerSet {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
