//! quizrun-core — Problem loading, interactive session, and scoring.
//!
//! This crate holds the whole quiz pipeline: reading CSV records, turning them
//! into problems, optionally shuffling them, running the timed prompt loop,
//! and scoring the collected answers.

pub mod builder;
pub mod error;
pub mod model;
pub mod order;
pub mod report;
pub mod scorer;
pub mod session;
pub mod source;

pub use error::{ErrorKind, QuizError};
pub use model::{AnswerSet, Problem, ProblemSet, RawRecord};
