//! Handles all user-facing output for the CLI.
//!
//! Test diagnostics go to stdout: the "badly formatted line" warning, the
//! mismatch report blocks, and the colored diff that follows each mismatch.
//! Passing tests print nothing.

use difference::Changeset;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::harness::{HarnessConfig, TestResult};

/// Prints the diagnostic for one test result, if any.
pub fn report(result: &TestResult, config: &HarnessConfig) {
    match result {
        TestResult::Pass { .. } => {}
        TestResult::Malformed { line_number } => {
            println!("Badly formatted line {}", line_number);
        }
        TestResult::StdoutMismatch {
            line_number,
            actual,
            expected,
        } => print_mismatch("stdout", *line_number, actual, expected, config),
        TestResult::StderrMismatch {
            line_number,
            actual,
            expected,
        } => print_mismatch("stderr", *line_number, actual, expected, config),
    }
}

/// Prints a mismatch report: actual lines, expected lines, then a diff.
fn print_mismatch(
    stream: &str,
    line_number: usize,
    actual: &[String],
    expected: &[String],
    config: &HarnessConfig,
) {
    println!("{} mismatch (test defined on line {})", stream, line_number);
    println!("We got:");
    for line in actual {
        println!("{}", line);
    }
    println!("We expected:");
    for line in expected {
        println!("{}", line);
    }
    print_line_diff(expected, actual, config);
}

/// Prints a colored line diff of expected vs actual.
///
/// Removed lines (expected but not produced) are red with a `-` marker;
/// added lines (produced but not expected) are green with a `+` marker.
fn print_line_diff(expected: &[String], actual: &[String], config: &HarnessConfig) {
    let choice = if config.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let changeset = Changeset::new(&expected.join("\n"), &actual.join("\n"), "\n");
    for diff in &changeset.diffs {
        match diff {
            difference::Difference::Same(ref x) => {
                let _ = stdout.reset();
                println!(" {}", x);
            }
            difference::Difference::Add(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                println!("+{}", x);
            }
            difference::Difference::Rem(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                println!("-{}", x);
            }
        }
    }
    let _ = stdout.reset();
}
