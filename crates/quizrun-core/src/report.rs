//! Quiz run reports with JSON persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ProblemSet;
use crate::scorer::Evaluation;
use crate::session::SessionOutcome;

/// A complete record of one quiz run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Problem file the run was loaded from.
    pub source: PathBuf,
    /// Whether the problems were shuffled.
    pub shuffled: bool,
    /// Overall time limit in seconds, if one was set.
    pub time_limit_secs: Option<u64>,
    /// Whether the deadline ended the session early.
    pub timed_out: bool,
    /// Session wall time in milliseconds.
    pub duration_ms: u64,
    /// Number of correct answers.
    pub correct: usize,
    /// Number of problems in the set.
    pub total: usize,
    /// One entry per problem, in the order asked.
    pub entries: Vec<ReportEntry>,
}

/// How a single problem went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub question: String,
    pub expected: String,
    /// `None` when the session ended before this problem was answered.
    pub given: Option<String>,
    pub correct: bool,
}

/// Run settings recorded alongside the results.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub source: PathBuf,
    pub shuffled: bool,
    pub time_limit_secs: Option<u64>,
}

impl QuizReport {
    pub fn new(
        settings: RunSettings,
        problems: &ProblemSet,
        outcome: &SessionOutcome,
        evaluation: &Evaluation,
    ) -> Self {
        let entries = problems
            .iter()
            .enumerate()
            .map(|(i, problem)| ReportEntry {
                question: problem.question().to_string(),
                expected: problem.answer().to_string(),
                given: outcome.answers.get(i).cloned(),
                correct: evaluation.results.get(i).copied().unwrap_or(false),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source: settings.source,
            shuffled: settings.shuffled,
            time_limit_secs: settings.time_limit_secs,
            timed_out: outcome.timed_out,
            duration_ms: outcome.elapsed.as_millis() as u64,
            correct: evaluation.correct,
            total: evaluation.total,
            entries,
        }
    }

    /// Write the report as pretty JSON, creating missing parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create report directory {}", dir.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("failed to create report {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        writer.flush()?;
        tracing::debug!("saved report {} to {}", self.id, path.display());
        Ok(())
    }

    /// Entries that were answered wrongly or not at all.
    pub fn missed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.correct)
    }
}
