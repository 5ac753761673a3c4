//! quizrun CLI — asks the questions in a CSV file and scores the answers.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod legacy;
mod run;

use run::{RunFlags, RunOptions};

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed terminal quiz runner")]
struct Cli {
    /// A csv file in the format of 'question,answer' [default: problems.csv]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The time limit for the quiz in seconds, 0 for none [default: 30]
    #[arg(short, long)]
    time: Option<u64>,

    /// Change the order of the quiz
    #[arg(short, long, overrides_with = "no_shuffle")]
    shuffle: bool,

    /// Keep file order even if the config enables shuffling
    #[arg(long, overrides_with = "shuffle")]
    no_shuffle: bool,

    /// Seed for --shuffle, to repeat an order
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print a per-problem breakdown to stderr after the summary
    #[arg(long)]
    review: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizrun=warn")),
        )
        .init();

    let cli = Cli::parse_from(legacy::normalize_args(std::env::args_os()));

    if let Err(e) = execute(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;
    let flags = RunFlags {
        file: cli.file,
        time: cli.time,
        shuffle: shuffle_flag(cli.shuffle, cli.no_shuffle),
        seed: cli.seed,
        report: cli.report,
        review: cli.review,
    };
    run::execute(RunOptions::resolve(flags, config)).await
}

/// `None` when neither `--shuffle` nor `--no-shuffle` was given.
fn shuffle_flag(shuffle: bool, no_shuffle: bool) -> Option<bool> {
    match (shuffle, no_shuffle) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffle_from(args: &[&str]) -> Option<bool> {
        let cli = Cli::try_parse_from(std::iter::once("quizrun").chain(args.iter().copied()))
            .unwrap();
        shuffle_flag(cli.shuffle, cli.no_shuffle)
    }

    #[test]
    fn shuffle_flags_resolve_to_last_given() {
        assert_eq!(shuffle_from(&[]), None);
        assert_eq!(shuffle_from(&["--shuffle"]), Some(true));
        assert_eq!(shuffle_from(&["--no-shuffle"]), Some(false));
        assert_eq!(shuffle_from(&["--shuffle", "--no-shuffle"]), Some(false));
        assert_eq!(shuffle_from(&["--no-shuffle", "-s"]), Some(true));
    }

    #[test]
    fn time_accepts_full_u64_range() {
        let max = u64::MAX.to_string();
        let cli = Cli::try_parse_from(["quizrun", "--time", max.as_str()]).unwrap();
        assert_eq!(cli.time, Some(u64::MAX));
    }
}
