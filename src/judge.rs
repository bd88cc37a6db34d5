use std::{
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use tokio::{io::AsyncWriteExt, process::Command};

use crate::{
    finder::{find_pair, IndexPair},
    input::PairInput,
    output::{render_outcome, BracketStyle},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    pub input: String,
    #[serde(alias = "expectedOutput")]
    pub expected_output: String,
}

impl TestCase {
    pub fn new(input: &str, expected_output: &str) -> Self {
        Self {
            input: input.to_string(),
            expected_output: expected_output.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Suite {
    pub test_cases: Vec<TestCase>,
}

/// The stored Two Sum cases. Expected outputs use the compact bracket style.
pub fn builtin_suite() -> Vec<TestCase> {
    vec![
        TestCase::new("5\n2 7 11 15 1\n9", "[0,1]"),
        TestCase::new("4\n3 2 4 0\n6", "[1,2]"),
        TestCase::new("6\n3 3 5 6 2 1\n6", "[0,1]"),
        TestCase::new("2\n1 5\n6", "[0,1]"),
        TestCase::new("3\n0 4 3\n7", "[1,2]"),
    ]
}

pub fn load_suite(path: &Path) -> Result<Vec<TestCase>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read test cases from {}", path.display()))?;
    let suite: Suite = serde_json::from_str(&content)
        .with_context(|| format!("invalid test case file {}", path.display()))?;
    Ok(suite.test_cases)
}

/// What a single run produced. `error` is set when the run did not finish
/// normally; `output` is then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    pub output: String,
    pub error: Option<String>,
}

impl Execution {
    fn succeeded(output: String) -> Self {
        Self {
            output,
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: Some(error.into()),
        }
    }
}

pub enum Executor {
    /// Run the in-process pair finder.
    Builtin(BracketStyle),
    /// Run an external executable, feeding the case on stdin.
    Program { path: PathBuf, timeout: Duration },
}

impl Executor {
    pub async fn run(&self, input: &str) -> Execution {
        match self {
            Executor::Builtin(style) => match PairInput::parse(input) {
                Ok(parsed) => {
                    let outcome = find_pair(&parsed.nums, parsed.target);
                    Execution::succeeded(render_outcome(outcome, *style))
                }
                Err(e) => Execution::failed(e.to_string()),
            },
            Executor::Program { path, timeout } => run_program(path, input, *timeout).await,
        }
    }
}

async fn run_program(path: &Path, input: &str, timeout: Duration) -> Execution {
    log::debug!("spawning {} with a {:?} limit", path.display(), timeout);

    match tokio::time::timeout(timeout, spawn_and_wait(path, input)).await {
        Err(_) => Execution::failed("Execution timed out"),
        Ok(Err(e)) => Execution::failed(format!("{e:#}")),
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if output.status.success() {
                Execution::succeeded(String::from_utf8_lossy(&output.stdout).into_owned())
            } else if !stderr.trim().is_empty() {
                Execution::failed(stderr)
            } else {
                Execution::failed(format!("Exited with {}", output.status))
            }
        }
    }
}

async fn spawn_and_wait(path: &Path, input: &str) -> Result<std::process::Output> {
    // Dropping the child on timeout kills it.
    let mut child = Command::new(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to start {}", path.display()))?;

    // Feed stdin from its own task so stdout and stderr drain while we write.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.as_bytes().to_vec();
        tokio::spawn(async move {
            if let Err(e) = stdin.write_all(&input).await {
                // The program may exit without reading its input.
                log::debug!("could not write test input: {}", e);
            }
        })
    });

    let output = child.wait_with_output().await?;
    if let Some(writer) = writer {
        if let Err(e) = writer.await {
            log::debug!("input writer task failed: {}", e);
        }
    }

    Ok(output)
}

/// Two outputs agree if they are equal after trimming, or if both are index
/// pairs with the same indices regardless of bracket spacing.
///
/// This accepts `[0, 1]` where `[0,1]` is expected and vice versa, so either
/// bracket style passes a suite.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    let (actual, expected) = (actual.trim(), expected.trim());
    if actual == expected {
        return true;
    }
    match (actual.parse::<IndexPair>(), expected.parse::<IndexPair>()) {
        (Ok(a), Ok(e)) => a == e,
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCase {
    /// Zero-based position of the case in the suite.
    pub index: usize,
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { passed: usize },
    WrongAnswer(FailedCase),
}

#[cfg(test)]
pub async fn judge(cases: &[TestCase], executor: &Executor) -> Verdict {
    judge_with_progress(cases, executor, &ProgressBar::hidden()).await
}

/// Run cases in order and stop at the first one that fails.
pub async fn judge_with_progress(
    cases: &[TestCase],
    executor: &Executor,
    progress: &ProgressBar,
) -> Verdict {
    for (index, case) in cases.iter().enumerate() {
        let execution = executor.run(&case.input).await;
        progress.inc(1);

        let passed = execution.error.is_none()
            && outputs_match(&execution.output, &case.expected_output);
        log::info!("case #{}: {}", index + 1, if passed { "ok" } else { "failed" });

        if !passed {
            return Verdict::WrongAnswer(FailedCase {
                index,
                input: case.input.clone(),
                expected_output: case.expected_output.trim().to_string(),
                actual_output: execution.output.trim().to_string(),
                error: execution.error,
            });
        }
    }

    Verdict::Accepted {
        passed: cases.len(),
    }
}
