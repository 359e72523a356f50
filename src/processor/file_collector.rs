//! # File Collector Module
//!
//! This module collects the files a check or run operates on: either a single
//! file, or every matching file below a directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// File collector for directory traversal.
///
/// The `FileCollector` handles:
/// - Selecting files by extension during a recursive walk
/// - Skipping paths matching exclude globs (relative to the walk root)
pub struct FileCollector {
  /// Lowercased extensions without the leading dot
  extensions: Vec<String>,
  /// Exclude patterns
  exclude: Vec<glob::Pattern>,
}

impl FileCollector {
  /// Creates a new FileCollector.
  ///
  /// # Errors
  ///
  /// Returns an error if an exclude pattern is not a valid glob.
  pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
    let exclude = exclude
      .iter()
      .map(|pattern| glob::Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {pattern}")))
      .collect::<Result<Vec<_>>>()?;

    Ok(Self {
      extensions: extensions.iter().map(|ext| ext.trim_start_matches('.').to_lowercase()).collect(),
      exclude,
    })
  }

  /// Collects the files for `path`.
  ///
  /// A file is returned as is, whatever its extension. A directory is walked
  /// only when `recursive` is set.
  ///
  /// # Errors
  ///
  /// Returns an error if `path` doesn't exist, if it is a directory and
  /// `recursive` is not set, or if the walk fails.
  pub fn collect(&self, path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path).with_context(|| format!("failed splitting path {:?}", path.display().to_string()))?;

    if metadata.is_file() {
      return Ok(vec![path.to_path_buf()]);
    }

    if !recursive {
      bail!("nothing to do on path {:?}", path.display().to_string());
    }

    self.traverse_directory(path)
  }

  /// Walks `dir` recursively in lexical order and collects matching files.
  pub fn traverse_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
      let entry = entry.with_context(|| format!("failed walking dir {:?}", dir.display().to_string()))?;
      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.path();
      if !self.has_walked_extension(path) {
        continue;
      }

      if self.is_excluded(path, dir) {
        trace!("Skipping: {} (excluded)", path.display());
        continue;
      }

      files.push(path.to_path_buf());
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }

  fn has_walked_extension(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
  }

  fn is_excluded(&self, path: &Path, root: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    self.exclude.iter().any(|pattern| pattern.matches_path(relative))
  }
}
