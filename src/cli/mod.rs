//! The goldrun command-line interface.
//!
//! This module is the main entry point for the CLI and orchestrates the
//! core library functions: parse arguments, run the manifest, report each
//! result as it is produced.

use std::process;

use clap::Parser;

use crate::cli::args::GoldrunArgs;
use crate::harness::{self, HarnessConfig};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
///
/// A completed run always exits 0, even when tests mismatched; only a
/// usage error or a fatal harness error produces exit code 1.
pub fn run() {
    let args = match GoldrunArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too; those are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = HarnessConfig::default();
    let outcome = harness::run_manifest(&args.workdir, &args.command, &config, |result| {
        output::report(result, &config)
    });

    if let Err(e) = outcome {
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        process::exit(1);
    }
}
