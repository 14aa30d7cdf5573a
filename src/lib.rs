pub use crate::error::HarnessError;
pub use crate::harness::{HarnessConfig, TestResult};

pub mod cli;
pub mod error;
pub mod harness;
pub mod manifest;
