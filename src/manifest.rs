//! Manifest parsing.
//!
//! The manifest is a plain text file, one test case per line:
//!
//! ```text
//! expected_stdout_file|expected_stderr_file|extra_arg1|extra_arg2|...
//! ```
//!
//! `#`-prefixed and blank lines are ignored. The first two fields name
//! expected-output files under the test directory; either may be empty
//! (see [`crate::harness`] for the empty-field conventions). Every field
//! from index 2 onward is appended verbatim to the base command.
//!
//! The format has no escaping: a literal `|` cannot appear in an argument.
//! This is a known constraint of the format, kept as-is.

/// One test case, derived from a single manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based manifest line number, counting comments and blanks.
    pub line_number: usize,
    /// Expected-stdout file name, or `None` when the field was empty.
    pub expected_stdout: Option<String>,
    /// Expected-stderr file name, or `None` when the field was empty.
    pub expected_stderr: Option<String>,
    /// Arguments appended to the base command, in manifest order.
    /// Empty fields are preserved as empty-string arguments.
    pub extra_args: Vec<String>,
}

/// Classification of one raw manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine {
    /// Comment or blank line. Never reported, never runs a child.
    Ignored,
    /// Fewer than two `|`-separated fields. Reported and skipped.
    Malformed,
    /// A well-formed test case.
    Case(TestCase),
}

/// Classifies a single raw manifest line.
///
/// The line is trimmed before classification, so indented comments and
/// trailing whitespace are tolerated. Fields themselves are not trimmed.
pub fn classify(raw: &str, line_number: usize) -> ManifestLine {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return ManifestLine::Ignored;
    }

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return ManifestLine::Malformed;
    }

    let file_name = |field: &str| {
        if field.is_empty() {
            None
        } else {
            Some(field.to_string())
        }
    };

    ManifestLine::Case(TestCase {
        line_number,
        expected_stdout: file_name(fields[0]),
        expected_stderr: file_name(fields[1]),
        extra_args: fields[2..].iter().map(|f| f.to_string()).collect(),
    })
}
