//! # license-header
//!
//! Checks and generates license headers in source files.

mod cli;

use anyhow::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
  Cli::parse_args().run()
}
