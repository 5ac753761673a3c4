//! Runs one quiz end to end.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizrun_core::builder::build_problems;
use quizrun_core::order::shuffle_problems;
use quizrun_core::report::{QuizReport, RunSettings};
use quizrun_core::scorer::evaluate;
use quizrun_core::session::Session;
use quizrun_core::source;

use crate::config::QuizConfig;

/// Fully resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub file: PathBuf,
    pub time_limit_secs: u64,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
    pub review: bool,
}

/// Flags as given on the command line, before config defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct RunFlags {
    pub file: Option<PathBuf>,
    pub time: Option<u64>,
    pub shuffle: Option<bool>,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
    pub review: bool,
}

impl RunOptions {
    /// Merge flags over config. A flag that was not given falls back to config.
    pub fn resolve(flags: RunFlags, config: QuizConfig) -> Self {
        let report = flags.report.or_else(|| {
            config.report_dir.map(|dir| {
                let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
                dir.join(format!("quiz-{timestamp}.json"))
            })
        });

        Self {
            file: flags.file.unwrap_or(config.file),
            time_limit_secs: flags.time.unwrap_or(config.time_limit_secs),
            shuffle: flags.shuffle.unwrap_or(config.shuffle),
            seed: flags.seed,
            report,
            review: flags.review,
        }
    }

    fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_secs > 0).then(|| Duration::from_secs(self.time_limit_secs))
    }
}

pub async fn execute(options: RunOptions) -> Result<()> {
    let records = source::read_records(&options.file)?;
    let mut problems = build_problems(records);

    if options.shuffle {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        problems = shuffle_problems(problems, &mut rng);
    }

    tracing::info!(
        "starting quiz: {} problems from {}",
        problems.len(),
        options.file.display()
    );

    let mut session = Session::new(io::stdout(), BufReader::new(io::stdin()));
    let outcome = session.run(&problems, options.time_limit()).await?;

    let evaluation = evaluate(&problems, &outcome.answers);
    let mut stdout = session.into_output();
    evaluation.write_summary(&mut stdout)?;

    if options.report.is_none() && !options.review {
        return Ok(());
    }

    let settings = RunSettings {
        source: options.file.clone(),
        shuffled: options.shuffle,
        time_limit_secs: options.time_limit().map(|d| d.as_secs()),
    };
    let report = QuizReport::new(settings, &problems, &outcome, &evaluation);

    if options.review {
        print_review(&report);
    }

    if let Some(path) = &options.report {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_review(report: &QuizReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Expected", "Given", "Result"]);

    for (i, entry) in report.entries.iter().enumerate() {
        let result = match (&entry.given, entry.correct) {
            (None, _) => "SKIPPED",
            (Some(_), true) => "OK",
            (Some(_), false) => "WRONG",
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.question),
            Cell::new(&entry.expected),
            Cell::new(entry.given.as_deref().unwrap_or("-")),
            Cell::new(result),
        ]);
    }

    eprintln!("\n{table}");
    let missed = report.missed().count();
    if missed > 0 {
        eprintln!("Missed {missed} of {}.", report.total);
    }
    if report.timed_out {
        eprintln!("Time ran out after {:.1}s.", report.duration_ms as f64 / 1000.0);
    }
}
