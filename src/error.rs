//! Fatal error types for the harness.
//!
//! Only conditions that abort the whole run live here. Per-test conditions
//! (a malformed manifest line, a stdout or stderr mismatch) are not errors:
//! they are reported and the run continues with the next manifest line.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort the entire run.
#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("failed to read manifest '{path}'")]
    #[diagnostic(
        code(goldrun::manifest::read),
        help("the manifest is looked up at <testdir>/testlist, relative to the current directory")
    )]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read expected-output file '{path}'")]
    #[diagnostic(code(goldrun::expected::read))]
    ExpectedRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch '{program}'")]
    #[diagnostic(code(goldrun::child::spawn))]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("child {stream} was not valid UTF-8")]
    #[diagnostic(code(goldrun::child::decode))]
    OutputDecode {
        stream: &'static str,
        #[source]
        source: FromUtf8Error,
    },
}
