//! Quiz configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Problem file to load.
    #[serde(default = "default_file")]
    pub file: PathBuf,
    /// Overall time limit in seconds; 0 disables it.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Shuffle problems before asking them.
    #[serde(default)]
    pub shuffle: bool,
    /// Directory for JSON run reports; no report is written when unset.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

fn default_file() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            time_limit_secs: default_time_limit(),
            shuffle: false,
            report_dir: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
///
/// Environment variable overrides: `QUIZRUN_FILE`, `QUIZRUN_TIME_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply `QUIZRUN_*` overrides using `lookup` to read variables.
fn apply_env_overrides<F>(mut config: QuizConfig, lookup: F) -> Result<QuizConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(file) = lookup("QUIZRUN_FILE") {
        config.file = PathBuf::from(file);
    }

    if let Some(secs) = lookup("QUIZRUN_TIME_LIMIT") {
        config.time_limit_secs = secs
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZRUN_TIME_LIMIT: '{secs}'"))?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.file, PathBuf::from("problems.csv"));
        assert_eq!(config.time_limit_secs, 30);
        assert!(!config.shuffle);
        assert!(config.report_dir.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizConfig = toml::from_str("shuffle = true\ntime_limit_secs = 10\n").unwrap();
        assert!(config.shuffle);
        assert_eq!(config.time_limit_secs, 10);
        assert_eq!(config.file, PathBuf::from("problems.csv"));
    }

    #[test]
    fn load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "file = \"capitals.csv\"\nreport_dir = \"reports\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.file, PathBuf::from("capitals.csv"));
        assert_eq!(config.report_dir, Some(PathBuf::from("reports")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("no_such_quizrun.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn env_overrides_apply() {
        let config = apply_env_overrides(
            QuizConfig::default(),
            env(&[("QUIZRUN_FILE", "other.csv"), ("QUIZRUN_TIME_LIMIT", " 5 ")]),
        )
        .unwrap();
        assert_eq!(config.file, PathBuf::from("other.csv"));
        assert_eq!(config.time_limit_secs, 5);
    }

    #[test]
    fn invalid_env_time_limit_is_an_error() {
        let result = apply_env_overrides(
            QuizConfig::default(),
            env(&[("QUIZRUN_TIME_LIMIT", "soon")]),
        );
        assert!(result.is_err());
    }
}
