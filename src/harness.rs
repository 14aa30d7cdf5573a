//! Golden-test execution.
//!
//! Runs one child process per manifest test case and compares its captured
//! stdout and stderr against expected text files, line by line.
//!
//! Execution is fully sequential and synchronous: each child is spawned,
//! run to completion, and fully drained before the next manifest line is
//! considered. No timeout is enforced on the child.
//!
//! # Line normalization
//!
//! Both captured output and expected files are split into lines with each
//! line stripped of leading and trailing whitespace. Interior empty lines
//! survive normalization; comparison is exact list equality (count,
//! content, and order).
//!
//! # Empty-field conventions
//!
//! An empty expected-stdout field means "expect zero lines of stdout". An
//! empty expected-stderr field means "expect exactly one empty line of
//! stderr". The asymmetry is inherited from the original manifest format
//! and is preserved exactly; a child that writes nothing to stderr does
//! not satisfy an empty stderr field.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::HarnessError;
use crate::manifest::{self, ManifestLine, TestCase};

// =============================================================================
// CORE TYPES
// =============================================================================

/// Configuration for harness execution and reporting.
pub struct HarnessConfig {
    /// Directory holding the `testlist` manifest and expected-output files.
    pub test_dir: PathBuf,
    /// Whether mismatch diffs are colorized.
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("tests"),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// Outcome of one manifest line.
///
/// A stdout mismatch short-circuits the stderr check for that line, so at
/// most one mismatch is produced per test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Output matched on both streams. Passes are silent.
    Pass { line_number: usize },
    /// The manifest line had fewer than two fields.
    Malformed { line_number: usize },
    /// Captured stdout differed from the expected lines.
    StdoutMismatch {
        line_number: usize,
        actual: Vec<String>,
        expected: Vec<String>,
    },
    /// Stdout matched but captured stderr differed.
    StderrMismatch {
        line_number: usize,
        actual: Vec<String>,
        expected: Vec<String>,
    },
}

impl TestResult {
    /// The 1-based manifest line this result was defined on.
    pub fn line_number(&self) -> usize {
        match self {
            TestResult::Pass { line_number }
            | TestResult::Malformed { line_number }
            | TestResult::StdoutMismatch { line_number, .. }
            | TestResult::StderrMismatch { line_number, .. } => *line_number,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }
}

// =============================================================================
// LINE NORMALIZATION AND EXPECTED OUTPUT
// =============================================================================

/// Splits captured or expected text into trimmed lines.
fn normalize_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Loads an expected-output file from the test directory.
fn load_expected(test_dir: &Path, name: &str) -> Result<Vec<String>, HarnessError> {
    let path = test_dir.join(name);
    let content = fs::read_to_string(&path)
        .map_err(|source| HarnessError::ExpectedRead { path, source })?;
    Ok(normalize_lines(&content))
}

fn decode_stream(stream: &'static str, bytes: Vec<u8>) -> Result<Vec<String>, HarnessError> {
    let text = String::from_utf8(bytes)
        .map_err(|source| HarnessError::OutputDecode { stream, source })?;
    Ok(normalize_lines(&text))
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Runs a single test case and compares its output.
///
/// The child runs as `<command...> <extra_args...>` with its working
/// directory set to `workdir`. Stdin is not connected; stdout and stderr
/// are captured separately. Expected files are read after the child has
/// finished, so a missing expected file aborts the run only once its test
/// case is reached.
pub fn run_case(
    case: &TestCase,
    workdir: &Path,
    command: &[String],
    config: &HarnessConfig,
) -> Result<TestResult, HarnessError> {
    let (program, leading_args) = match command.split_first() {
        Some(parts) => parts,
        None => {
            return Err(HarnessError::Spawn {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty base command"),
            });
        }
    };

    let output = Command::new(program)
        .args(leading_args)
        .args(&case.extra_args)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| HarnessError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = decode_stream("stdout", output.stdout)?;
    let stderr = decode_stream("stderr", output.stderr)?;

    let expected_stdout = match case.expected_stdout.as_deref() {
        None => Vec::new(),
        Some(name) => load_expected(&config.test_dir, name)?,
    };
    // An empty stderr field expects one empty line, not zero lines.
    let expected_stderr = match case.expected_stderr.as_deref() {
        None => vec![String::new()],
        Some(name) => load_expected(&config.test_dir, name)?,
    };

    if stdout != expected_stdout {
        return Ok(TestResult::StdoutMismatch {
            line_number: case.line_number,
            actual: stdout,
            expected: expected_stdout,
        });
    }
    if stderr != expected_stderr {
        return Ok(TestResult::StderrMismatch {
            line_number: case.line_number,
            actual: stderr,
            expected: expected_stderr,
        });
    }
    Ok(TestResult::Pass {
        line_number: case.line_number,
    })
}

/// Runs every test case in the manifest, in file order.
///
/// The manifest is read from `<test_dir>/testlist`. Each result is handed
/// to `on_result` as soon as it is known, so diagnostics appear before a
/// later fatal error aborts the run. Returns the full result list on a
/// completed run.
pub fn run_manifest<F>(
    workdir: &Path,
    command: &[String],
    config: &HarnessConfig,
    mut on_result: F,
) -> Result<Vec<TestResult>, HarnessError>
where
    F: FnMut(&TestResult),
{
    let manifest_path = config.test_dir.join("testlist");
    let content = fs::read_to_string(&manifest_path).map_err(|source| {
        HarnessError::ManifestRead {
            path: manifest_path.clone(),
            source,
        }
    })?;

    let mut results = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let result = match manifest::classify(raw, line_number) {
            ManifestLine::Ignored => continue,
            ManifestLine::Malformed => TestResult::Malformed { line_number },
            ManifestLine::Case(case) => run_case(&case, workdir, command, config)?,
        };
        on_result(&result);
        results.push(result);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_each_line_and_keeps_interior_blanks() {
        assert_eq!(
            normalize_lines("  a  \n\n b\n"),
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn normalize_of_empty_text_is_empty() {
        assert_eq!(normalize_lines(""), Vec::<String>::new());
    }

    #[test]
    fn normalize_treats_missing_trailing_newline_like_present_one() {
        assert_eq!(normalize_lines("x"), vec!["x".to_string()]);
        assert_eq!(normalize_lines("x\n"), vec!["x".to_string()]);
    }

    #[test]
    fn result_line_numbers_are_exposed() {
        let result = TestResult::StdoutMismatch {
            line_number: 9,
            actual: vec![],
            expected: vec![],
        };
        assert_eq!(result.line_number(), 9);
        assert!(!result.is_pass());
    }
}
