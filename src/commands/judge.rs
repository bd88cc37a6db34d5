//! Judge command - Run a test-case suite against the finder or a program

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    commands::print_verdict,
    config::Config,
    judge::{builtin_suite, judge_with_progress, load_suite, Executor, Verdict},
};

/// Judge a suite of test cases, print the verdict and return it
pub async fn execute(
    config: &Config,
    cases: Option<PathBuf>,
    program: Option<PathBuf>,
    timeout_ms: Option<u64>,
) -> Result<Verdict> {
    let suite = match cases {
        Some(ref path) => load_suite(path)?,
        None => builtin_suite(),
    };

    let executor = match program {
        Some(path) => {
            let timeout = timeout_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| config.judge_timeout());
            println!(
                "{}",
                format!("Judging {} against {} test case(s)...", path.display(), suite.len()).cyan()
            );
            Executor::Program { path, timeout }
        }
        None => {
            println!(
                "{}",
                format!("Judging built-in finder against {} test case(s)...", suite.len()).cyan()
            );
            Executor::Builtin(config.bracket_style)
        }
    };

    let progress = ProgressBar::new(suite.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let verdict = judge_with_progress(&suite, &executor, &progress).await;
    progress.finish_and_clear();

    print_verdict(&verdict);
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_judge_builtin_suite() {
        let config = Config::default();
        let verdict = execute(&config, None, None, None).await.unwrap();
        assert_eq!(verdict, Verdict::Accepted { passed: 5 });
    }

    #[tokio::test]
    async fn test_judge_cases_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let cases_file = temp_dir.path().join("cases.json");
        fs::write(
            &cases_file,
            r#"{"test_cases": [
                {"input": "4\n2 7 11 15\n9", "expected_output": "[0, 1]"},
                {"input": "3 1 2 3 100", "expected_output": "No valid pair found."}
            ]}"#,
        )
        .unwrap();

        let config = Config::default();
        let verdict = execute(&config, Some(cases_file), None, None).await.unwrap();
        assert_eq!(verdict, Verdict::Accepted { passed: 2 });
    }

    #[tokio::test]
    async fn test_judge_reports_wrong_answer() {
        let temp_dir = TempDir::new().unwrap();
        let cases_file = temp_dir.path().join("cases.json");
        fs::write(
            &cases_file,
            r#"{"test_cases": [{"input": "3 1 2 3 100", "expected_output": "[0, 1]"}]}"#,
        )
        .unwrap();

        let config = Config::default();
        match execute(&config, Some(cases_file), None, None).await.unwrap() {
            Verdict::WrongAnswer(failed) => {
                assert_eq!(failed.index, 0);
                assert_eq!(failed.actual_output, "No valid pair found.");
                assert_eq!(failed.expected_output, "[0, 1]");
            }
            other => panic!("expected a wrong answer, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_judge_missing_cases_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        let result = execute(&config, Some(temp_dir.path().join("nope.json")), None, None).await;
        assert!(result.is_err());
    }
}
