//! # Processor Module
//!
//! This module drives header verification and stamping over files and
//! directories.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and file selection
//!
//! The [`Processor`] struct is the main entry point, combining the collector,
//! the comment style resolver and the [`HeaderChecker`].

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::comment::{CommentStyle, CommentStyleResolver, create_resolver};
use crate::diff::DiffManager;
use crate::header::{HeaderChecker, HeaderError};
use crate::report::FileReport;

/// What to do with files whose header doesn't verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Report the failure
  Check,
  /// Prepend the header
  Write,
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// The canonical header; its style is used when a file's style can't be
  /// resolved
  pub checker: HeaderChecker,
  pub mode: Mode,

  /// Log failures and keep going instead of stopping (`Check`) or writing
  /// (`Write`)
  pub dry_run: bool,

  /// Extensions visited by a recursive walk
  pub extensions: Vec<String>,
  /// Glob patterns excluded from a recursive walk
  pub exclude: Vec<String>,

  pub resolver: Option<Box<dyn CommentStyleResolver>>,
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     dry_run: true,
  ///     ..ProcessorConfig::new(checker, Mode::Check)
  /// }
  /// ```
  pub fn new(checker: HeaderChecker, mode: Mode) -> Self {
    Self {
      checker,
      mode,
      dry_run: false,
      extensions: crate::config::DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
      exclude: Vec::new(),
      resolver: None,
      diff_manager: None,
    }
  }
}

/// Processor for checking and stamping license headers.
///
/// Files are handled one after the other. Each verification reads only the
/// header region of its file and closes it before the next file is opened.
pub struct Processor {
  checker: HeaderChecker,
  mode: Mode,
  dry_run: bool,
  resolver: Box<dyn CommentStyleResolver>,
  diff_manager: DiffManager,
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor.
  ///
  /// # Errors
  ///
  /// Returns an error if an exclude pattern is invalid.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let file_collector = FileCollector::new(&config.extensions, &config.exclude)?;

    Ok(Self {
      checker: config.checker,
      mode: config.mode,
      dry_run: config.dry_run,
      resolver: config.resolver.unwrap_or_else(|| create_resolver(None)),
      diff_manager: config.diff_manager.unwrap_or_default(),
      file_collector,
    })
  }

  /// Processes a single file or, with `recursive`, a directory tree.
  ///
  /// # Returns
  ///
  /// One report per collected file, in walk order.
  ///
  /// # Errors
  ///
  /// Returns an error if the path can't be collected, if a header is missing
  /// in `Check` mode without `dry_run`, or if a file can't be read or
  /// rewritten in `Write` mode.
  pub fn process(&self, path: &Path, recursive: bool) -> Result<Vec<FileReport>> {
    let files = self.collect(path, recursive)?;
    self.process_collected(path, &files)
  }

  /// Collects the files [`Processor::process`] would look at.
  pub fn collect(&self, path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    self.file_collector.collect(path, recursive)
  }

  /// Processes files previously collected for `path`.
  ///
  /// When `path` itself is the only file, it is processed even if its
  /// extension has no known comment style, using the checker's own style.
  pub fn process_collected(&self, path: &Path, files: &[PathBuf]) -> Result<Vec<FileReport>> {
    let explicit = files.len() == 1 && files[0] == path;

    debug!("Processing {} files", files.len());

    let mut reports = Vec::with_capacity(files.len());
    for file in files {
      let style = match self.resolver.resolve(file) {
        Some(style) => style,
        None if explicit => self.checker.style().clone(),
        None => {
          trace!("Skipping: {} (no comment style defined for extension)", file.display());
          reports.push(FileReport::skipped(file, "No comment style defined for extension"));
          continue;
        }
      };

      reports.push(self.process_file(file, style)?);
    }

    Ok(reports)
  }

  /// Verifies one file under `style` and acts on a failure according to the
  /// mode.
  pub fn process_file(&self, path: &Path, style: CommentStyle) -> Result<FileReport> {
    let checker = self.checker.with_style(style);

    let err = match checker.verify_file(path) {
      Ok(()) => {
        trace!("Header valid: {}", path.display());
        return Ok(FileReport::valid(path));
      }
      Err(err) => err,
    };

    match (self.mode, self.dry_run) {
      (Mode::Check, false) => Err(anyhow!(
        "file {:?} is missing the license header: {}",
        path.display().to_string(),
        err
      )),
      (Mode::Check, true) => {
        warn!("{}: {}", path.display(), err);
        Ok(FileReport::missing(path, err.to_string()))
      }
      (Mode::Write, dry_run) => self.stamp(path, &checker, err, dry_run),
    }
  }

  fn stamp(&self, path: &Path, checker: &HeaderChecker, err: HeaderError, dry_run: bool) -> Result<FileReport> {
    if err.is_io() {
      return Err(err).with_context(|| format!("could not check file {:?}", path.display().to_string()));
    }

    if dry_run && !self.diff_manager.is_enabled() {
      warn!("{}: {}", path.display(), err);
      return Ok(FileReport::missing(path, err.to_string()));
    }

    let original = FileIO::read_bytes(path)?;
    let content = FileIO::prepend(&checker.render(), &original);

    if dry_run {
      warn!("{}: {}", path.display(), err);
      self.diff_manager.display_diff(
        path,
        &String::from_utf8_lossy(&original),
        &String::from_utf8_lossy(&content),
      )?;
      return Ok(FileReport::missing(path, err.to_string()));
    }

    FileIO::write_bytes(path, &content)?;
    debug!("Header added to {}", path.display());
    Ok(FileReport::added(path, err.to_string()))
  }
}
