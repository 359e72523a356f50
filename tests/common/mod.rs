#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use license_header::comment::CommentStyle;
use license_header::config::CONFIG_ENV_VAR;
use license_header::header::HeaderChecker;
use license_header::reference::{DEFAULT_WIDTH, HeaderData, render_reference};
use license_header::spdx::LicenseId;

pub const HOLDER: &str = "Jane Doe";
pub const PROJECT: &str = "demo";
pub const YEAR: i32 = 2026;

/// The wrapped reference header for the test project.
pub fn reference(license: LicenseId) -> String {
  let data = HeaderData {
    year: YEAR,
    copyright: HOLDER.to_string(),
    project: PROJECT.to_string(),
  };
  render_reference(license, &data, DEFAULT_WIDTH)
}

/// A checker for the test project's header under `marker`.
pub fn checker(license: LicenseId, marker: &str) -> HeaderChecker {
  HeaderChecker::new(CommentStyle::line(marker), &license.identifier(), &reference(license))
}

/// The header block `run` prepends for the test project.
pub fn stamped_header(license: LicenseId, marker: &str) -> String {
  checker(license, marker).render()
}

/// The binary, run from `dir` with a clean environment.
pub fn license_header(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("license-header")?;
  cmd
    .current_dir(dir)
    .env_remove(CONFIG_ENV_VAR)
    .env_remove("RUST_LOG")
    .arg("--colors=never");
  Ok(cmd)
}

/// The header flags for the test project.
pub fn project_args() -> [String; 6] {
  [
    "-c".to_string(),
    HOLDER.to_string(),
    "-n".to_string(),
    PROJECT.to_string(),
    "-y".to_string(),
    YEAR.to_string(),
  ]
}
