//! The interactive prompt loop.
//!
//! Each problem is printed as `Problem #<n>: <question> = ` and one line of
//! input is read as the answer. With a time limit, the whole session shares a
//! single deadline: once it elapses the session returns the answers gathered
//! so far.
//!
//! Input is read on a dedicated OS thread, one line per request. When the
//! deadline wins the race against a pending read, that read is abandoned, not
//! cancelled: the thread finishes it whenever input arrives and its reply is
//! dropped. A plain thread is used instead of `spawn_blocking` so that a read
//! stuck on a silent terminal never holds up runtime shutdown.

use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::error::QuizError;
use crate::model::{AnswerSet, ProblemSet};

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Answers in problem order; shorter than the problem set if timed out.
    pub answers: AnswerSet,
    /// Whether the deadline cut the session short.
    pub timed_out: bool,
    /// Wall time from the first prompt to the return.
    pub elapsed: Duration,
}

/// Serves one line of input per request from a background thread.
struct LineReader {
    requests: mpsc::Sender<oneshot::Sender<String>>,
}

impl LineReader {
    fn spawn<R>(mut input: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (requests, pending) = mpsc::channel::<oneshot::Sender<String>>();

        let spawned = thread::Builder::new()
            .name("quizrun-input".into())
            .spawn(move || {
                while let Ok(reply) = pending.recv() {
                    // The receiver is gone if the deadline already fired.
                    let _ = reply.send(read_answer_line(&mut input));
                }
            });
        if let Err(e) = spawned {
            tracing::error!("failed to start input thread: {e}");
        }

        Self { requests }
    }

    /// Ask for the next line. Resolves to an error if the thread is gone.
    fn request(&self) -> oneshot::Receiver<String> {
        let (reply, line) = oneshot::channel();
        if self.requests.send(reply).is_err() {
            tracing::debug!("input thread has exited");
        }
        line
    }
}

/// Read one line, mapping read errors and end of input to an empty string.
fn read_answer_line<R: BufRead>(input: &mut R) -> String {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => line,
        Err(e) => {
            tracing::debug!("treating unreadable input line as empty answer: {e}");
            String::new()
        }
    }
}

/// An interactive quiz session bound to an output sink and an input source.
pub struct Session<W: Write> {
    output: W,
    reader: LineReader,
}

impl<W: Write> Session<W> {
    pub fn new<R>(output: W, input: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            output,
            reader: LineReader::spawn(input),
        }
    }

    /// Ask every problem in order and collect trimmed answers.
    ///
    /// `time_limit` of `None` or zero runs without a deadline, as does a limit
    /// too large to represent as an instant.
    pub async fn run(
        &mut self,
        problems: &ProblemSet,
        time_limit: Option<Duration>,
    ) -> Result<SessionOutcome, QuizError> {
        let start = Instant::now();
        let deadline = time_limit
            .filter(|limit| !limit.is_zero())
            .and_then(|limit| start.checked_add(limit));
        let mut answers = AnswerSet::new();
        let mut timed_out = false;

        for (index, problem) in problems.iter().enumerate() {
            write!(
                self.output,
                "Problem #{}: {} = ",
                index + 1,
                problem.question()
            )?;
            self.output.flush()?;

            let pending = self.reader.request();
            let line = match deadline {
                Some(deadline) => {
                    tokio::select! {
                        line = pending => line,
                        _ = tokio::time::sleep_until(deadline) => {
                            timed_out = true;
                            break;
                        }
                    }
                }
                None => pending.await,
            };

            answers.push(line.unwrap_or_default().trim());
        }

        if timed_out {
            tracing::debug!(
                "deadline elapsed after {} of {} answers",
                answers.len(),
                problems.len()
            );
            writeln!(self.output)?;
            self.output.flush()?;
        }

        Ok(SessionOutcome {
            answers,
            timed_out,
            elapsed: start.elapsed(),
        })
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
