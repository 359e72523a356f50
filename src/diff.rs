//! # Diff Module
//!
//! Renders what `run --dry-run` would change: the header block that would be
//! prepended to each failing file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff rendering for header insertions.
///
/// Diffs are printed to stderr when `show_diff` is set and appended to
/// `save_diff_path` when one is given, so a whole run collects into a single
/// file.
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that collects every diff of the run
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether this manager produces any output at all.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the diff file so a run doesn't append to a stale one.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      std::fs::write(diff_path, "").with_context(|| format!("Failed to create diff file {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Builds the line diff between `original` and `new`.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);
    let mut rendered = format!("Diff for {}:\n", path.display());

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
      if change.missing_newline() {
        rendered.push('\n');
      }
    }

    rendered
  }

  /// Displays and/or saves the diff for one file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let rendered = Self::render(path, original, new);

    if self.show_diff {
      for line in rendered.lines() {
        if line.starts_with('+') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
        } else {
          eprintln!("{line}");
        }
      }
      eprintln!();
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file {}", diff_path.display()))?;
      writeln!(file, "{rendered}").with_context(|| format!("Failed to write diff file {}", diff_path.display()))?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_render_marks_inserted_header() {
    let rendered = DiffManager::render(Path::new("main.go"), "package main\n", "// header\n\npackage main\n");
    assert_eq!(rendered, "Diff for main.go:\n+// header\n+\n package main\n");
  }

  #[test]
  fn test_render_without_trailing_newline() {
    let rendered = DiffManager::render(Path::new("main.go"), "package main", "// header\n\npackage main");
    assert!(rendered.ends_with(" package main\n"));
  }

  #[test]
  fn test_save_diff_appends() -> Result<()> {
    let temp_dir = tempdir()?;
    let diff_path = temp_dir.path().join("changes.diff");
    let manager = DiffManager::new(false, Some(diff_path.clone()));
    manager.init()?;

    manager.display_diff(Path::new("a.go"), "a\n", "// h\na\n")?;
    manager.display_diff(Path::new("b.go"), "b\n", "// h\nb\n")?;

    let saved = std::fs::read_to_string(&diff_path)?;
    assert!(saved.contains("Diff for a.go:\n+// h\n a\n"));
    assert!(saved.contains("Diff for b.go:\n+// h\n b\n"));
    Ok(())
  }

  #[test]
  fn test_disabled_manager_is_silent() -> Result<()> {
    let manager = DiffManager::default();
    assert!(!manager.is_enabled());
    manager.display_diff(Path::new("a.go"), "a\n", "b\n")?;
    Ok(())
  }
}
