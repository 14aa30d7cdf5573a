//! Defines the command-line arguments for the goldrun CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
///
/// Everything after the working directory is the base command: the program
/// to run for every test case plus its leading arguments. Manifest extra
/// arguments are appended after these.
#[derive(Debug, Parser)]
#[command(
    name = "goldrun",
    version,
    about = "Runs a program once per manifest entry and compares captured output against expected files."
)]
pub struct GoldrunArgs {
    /// The directory the program under test runs in.
    pub workdir: PathBuf,

    /// The program to run for every test case, with its leading arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
