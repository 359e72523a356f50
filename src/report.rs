//! # Report Module
//!
//! Per-file results of a check or run, the summary built from them, and the
//! JSON report written with `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// The file already starts with the expected header
  Valid,
  /// The header is missing or differs (nothing was written)
  Missing,
  /// The header was prepended to the file
  Added,
  /// The file was not checked
  Skipped,
}

/// Information about a processed file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  pub status: FileStatus,
  /// The verification failure or skip reason, if any
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail: Option<String>,
}

impl FileReport {
  pub fn valid(path: &Path) -> Self {
    Self {
      path: path.to_path_buf(),
      status: FileStatus::Valid,
      detail: None,
    }
  }

  pub fn missing(path: &Path, detail: impl Into<String>) -> Self {
    Self {
      path: path.to_path_buf(),
      status: FileStatus::Missing,
      detail: Some(detail.into()),
    }
  }

  pub fn added(path: &Path, detail: impl Into<String>) -> Self {
    Self {
      path: path.to_path_buf(),
      status: FileStatus::Added,
      detail: Some(detail.into()),
    }
  }

  pub fn skipped(path: &Path, reason: impl Into<String>) -> Self {
    Self {
      path: path.to_path_buf(),
      status: FileStatus::Skipped,
      detail: Some(reason.into()),
    }
  }
}

/// Summary statistics for a processing run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
  /// Total number of files looked at
  pub total_files: usize,
  pub valid: usize,
  pub missing: usize,
  pub added: usize,
  pub skipped: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// Unix timestamp of the run
  pub timestamp: i64,
}

impl ProcessingSummary {
  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let count = |status: FileStatus| files.iter().filter(|file| file.status == status).count();

    Self {
      total_files: files.len(),
      valid: count(FileStatus::Valid),
      missing: count(FileStatus::Missing),
      added: count(FileStatus::Added),
      skipped: count(FileStatus::Skipped),
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Local::now().timestamp(),
    }
  }

  /// Whether any file still lacks a valid header.
  pub const fn has_missing(&self) -> bool {
    self.missing > 0
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes the JSON report to `output_path`.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let content = serde_json::to_string_pretty(&JsonReport { summary, files }).context("Failed to serialize report")?;

  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  fn reports() -> Vec<FileReport> {
    vec![
      FileReport::valid(Path::new("a.go")),
      FileReport::missing(Path::new("b.go"), "missing first line"),
      FileReport::added(Path::new("c.go"), "missing first line"),
      FileReport::skipped(Path::new("d.xyz"), "No comment style defined for extension"),
      FileReport::missing(Path::new("e.go"), "line 3: expected \"a\", got \"b\""),
    ]
  }

  #[test]
  fn test_summary_counts() {
    let summary = ProcessingSummary::from_reports(&reports(), Duration::from_millis(1500));

    assert_eq!(summary.total_files, 5);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.missing, 2);
    assert_eq!(summary.added, 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.has_missing());
    assert!((summary.processing_time_secs - 1.5).abs() < f64::EPSILON);
  }

  #[test]
  fn test_json_report() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("report.json");
    let files = reports();
    let summary = ProcessingSummary::from_reports(&files, Duration::from_secs(1));

    write_json_report(&output, &files, &summary)?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(value["summary"]["missing"], 2);
    assert_eq!(value["summary"]["processing_time_seconds"], 1.0);
    assert_eq!(value["files"][0]["path"], "a.go");
    assert_eq!(value["files"][0]["status"], "valid");
    assert!(value["files"][0].get("detail").is_none());
    assert_eq!(value["files"][2]["status"], "added");
    assert_eq!(value["files"][3]["detail"], "No comment style defined for extension");
    Ok(())
  }
}
